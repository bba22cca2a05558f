//! Debug dump of a layout tree: an indented listing of every node's
//! computed geometry.

use crate::node::NodeId;
use crate::tree::LayoutTree;
use std::fmt;

impl fmt::Debug for LayoutTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LAYOUT")?;

        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_node(
            tree: &LayoutTree,
            id: NodeId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            let node = tree.node(id);
            let rect = node.layout.rect;
            write_indent(f, depth)?;
            writeln!(
                f,
                "#{} ({:.1},{:.1}) {:.1}x{:.1}{}",
                id.0,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                if node.is_dirty { " dirty" } else { "" },
            )?;
            for child in &node.children {
                fmt_node(tree, *child, f, depth + 1)?;
            }
            Ok(())
        }

        for root in self.roots() {
            fmt_node(self, root, f, 0)?;
        }
        Ok(())
    }
}
