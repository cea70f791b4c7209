use colored::*;
use mmx_search::*;

/// Draw the tree with box-drawing stems, coloring nodes by role and state.
///
/// MAX is green, MIN red, pruned subtrees dimmed, the principal line yellow,
/// and the node of the latest step reversed.
pub fn tree(tree: &Tree, current: Option<NodeIndex>) -> String {
    let mut lines = vec![format!("ROOT   {}", node(tree, tree.root(), current))];
    branch(tree, tree.root(), current, "", &mut lines);
    lines.join("\n")
}

fn branch(tree: &Tree, x: NodeIndex, current: Option<NodeIndex>, prefix: &str, lines: &mut Vec<String>) {
    let children = tree.children(x);
    let n = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let last = i == n - 1;
        let gaps = if last { "    " } else { "│   " };
        let stem = if last { "└" } else { "├" };
        lines.push(format!("{}{}──{}", prefix, stem, node(tree, child, current)));
        branch(tree, child, current, &format!("{}{}", prefix, gaps), lines);
    }
}

fn node(tree: &Tree, x: NodeIndex, current: Option<NodeIndex>) -> ColoredString {
    let data = tree.at(x);
    let text = format!("#{:<2} {}", x.index(), label(data));
    let text = if data.pruned() {
        text.dimmed()
    } else if data.best() {
        text.yellow().bold()
    } else if data.is_leaf() {
        text.normal()
    } else if data.role().is_max() {
        text.green()
    } else {
        text.red()
    };
    match current == Some(x) {
        true => text.reversed(),
        false => text,
    }
}
