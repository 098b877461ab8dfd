//! Human-readable dump of the tree, for debugging.
//!
//! Leaf entries print as `key value`, one per line, indented one tab per
//! level below the root. Between two sibling subtrees the parent prints the
//! right subtree's routing key in parentheses:
//!
//! ```text
//! \ta 1
//! \tb 2
//! (c)
//! \tc 3
//! \td 4
//! ```

use std::fmt::{self, Display, Write};

use super::node::Node;
use super::BTree;

impl<K: Display, V: Display> BTree<K, V> {
    /// Render every leaf entry in key order, nested under its routing keys.
    ///
    /// The output always ends with an empty line.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

impl<K: Display, V: Display> Display for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indent = String::new();
        render(f, &*self.root, self.height, &mut indent)?;
        f.write_char('\n')
    }
}

fn render<K, V, W>(
    out: &mut W,
    node: &Node<K, V>,
    height: usize,
    indent: &mut String,
) -> fmt::Result
where
    K: Display,
    V: Display,
    W: Write,
{
    if height == 0 {
        for entry in node.entries() {
            if let Some(value) = entry.value() {
                writeln!(out, "{indent}{} {value}", entry.key)?;
            }
        }
        return Ok(());
    }

    for (j, entry) in node.entries().iter().enumerate() {
        if j > 0 {
            writeln!(out, "{indent}({})", entry.key)?;
        }
        indent.push('\t');
        let rendered = render(out, node.child(j), height - 1, indent);
        indent.pop();
        rendered?;
    }
    Ok(())
}
