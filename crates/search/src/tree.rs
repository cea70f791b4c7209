use crate::*;
use mmx_core::*;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// A binary game tree grown from [`Leaves`].
///
/// Internally wraps a petgraph `DiGraph` whose vertices hold [`Data`].
/// The root is always `NodeIndex(0)` and children are stored in creation
/// order, so sorting neighbors by index recovers the left-to-right order.
///
/// # Construction
///
/// Level-order expansion: with `levels = ceil(log2(n)) + 1`, every node at
/// depth `levels - 2` receives up to two leaves and every shallower node
/// receives two internal children. Once the values run out, internal nodes
/// still queued stay childless.
///
/// # Traversal
///
/// - `children(index)` — Ordered direct children
/// - `bfs()` / `postorder()` — Whole-tree orders
/// - `subtree(index)` — A node and all its descendants
#[derive(Debug, Clone)]
pub struct Tree {
    graph: DiGraph<Data, ()>,
}

impl Tree {
    pub fn build(leaves: &Leaves) -> Self {
        let levels = Self::levels(leaves.len());
        let mut graph = DiGraph::<Data, ()>::default();
        let mut values = leaves.iter().peekable();
        if levels == 1 {
            let value = values.next().expect("leaves are non-empty");
            graph.add_node(Data::leaf(value, 0));
            return Self { graph };
        }
        let root = graph.add_node(Data::internal(0));
        let mut queue = VecDeque::from([root]);
        while values.peek().is_some() {
            let Some(parent) = queue.pop_front() else {
                break;
            };
            let depth = graph[parent].depth();
            if depth + 2 == levels {
                for value in values.by_ref().take(2) {
                    let leaf = graph.add_node(Data::leaf(value, depth + 1));
                    graph.add_edge(parent, leaf, ());
                }
            } else {
                for _ in 0..2 {
                    let child = graph.add_node(Data::internal(depth + 1));
                    graph.add_edge(parent, child, ());
                    queue.push_back(child);
                }
            }
        }
        log::debug!(
            "built tree of {} nodes over {} levels from {} leaves",
            graph.node_count(),
            levels,
            leaves.len()
        );
        Self { graph }
    }
    /// `ceil(log2(n)) + 1`, with a single leaf forming a one-level tree.
    fn levels(n: usize) -> Depth {
        n.next_power_of_two().trailing_zeros() as Depth + 1
    }

    /// Number of nodes in the tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }
    pub fn at(&self, index: NodeIndex) -> &Data {
        self.graph.node_weight(index).expect("valid node index")
    }
    pub(crate) fn at_mut(&mut self, index: NodeIndex) -> &mut Data {
        self.graph.node_weight_mut(index).expect("valid node index")
    }
    /// Direct children, left to right.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self
            .graph
            .neighbors_directed(index, Outgoing)
            .collect::<Vec<_>>();
        children.sort();
        children
    }
    /// Parent node (None if this is the root).
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(index, Incoming).next()
    }
    /// get all Nodes in the Tree
    pub fn all(&self) -> impl Iterator<Item = (NodeIndex, &Data)> {
        self.graph
            .node_indices()
            .map(|index| (index, self.at(index)))
    }
    /// Deepest depth present in the tree.
    pub fn height(&self) -> Depth {
        self.all().map(|(_, d)| d.depth()).max().unwrap_or(0)
    }
    /// Leaf values, left to right.
    pub fn leaves(&self) -> Vec<Score> {
        self.postorder()
            .into_iter()
            .map(|index| self.at(index))
            .filter(|data| data.is_leaf())
            .filter_map(|data| data.value())
            .collect()
    }

    /// Iterate nodes in BFS order (root first) for top-down traversal.
    pub fn bfs(&self) -> Vec<NodeIndex> {
        use petgraph::visit::Walker;
        let mut order = petgraph::visit::Bfs::new(&self.graph, self.root())
            .iter(&self.graph)
            .collect::<Vec<_>>();
        order.sort_by_key(|index| (self.at(*index).depth(), *index));
        order
    }
    /// Iterate nodes in postorder (leaves first), left to right.
    pub fn postorder(&self) -> Vec<NodeIndex> {
        let mut result = Vec::with_capacity(self.n());
        let mut stack = vec![(self.root(), false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                result.push(node);
            } else {
                stack.push((node, true));
                for child in self.children(node).into_iter().rev() {
                    stack.push((child, false));
                }
            }
        }
        result
    }
    /// A node and every descendant, in preorder.
    pub fn subtree(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut result = Vec::new();
        let mut stack = vec![index];
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.children(node).into_iter().rev());
        }
        result
    }

    /// Mark a node and its whole subtree as pruned, returning the count.
    /// Descendants are not re-checked against any bound.
    pub(crate) fn prune(&mut self, index: NodeIndex) -> usize {
        let subtree = self.subtree(index);
        for node in subtree.iter() {
            self.at_mut(*node).prune();
        }
        subtree.len()
    }
    /// Reset every node to its freshly built state.
    pub fn clear(&mut self) {
        for data in self.graph.node_weights_mut() {
            data.clear();
        }
    }
    /// Whether any node carries search results.
    pub fn searched(&self) -> bool {
        self.all().any(|(_, d)| d.visited() || d.pruned())
    }

    /// Highlight the optimal line from the root after a search.
    ///
    /// At each node, follow the first visited child whose value equals the
    /// node's own; if none matches, follow the visited child that is best for
    /// the node's role. Stops at a leaf or at a node with no visited children.
    pub fn principal(&mut self) -> Vec<NodeIndex> {
        for data in self.graph.node_weights_mut() {
            data.clear_best();
        }
        let mut path = Vec::new();
        let mut node = self.root();
        while self.at(node).visited() {
            self.at_mut(node).highlight();
            path.push(node);
            let role = self.at(node).role();
            let target = self.at(node).value();
            let candidates = self
                .children(node)
                .into_iter()
                .filter(|child| self.at(*child).visited())
                .filter_map(|child| self.at(child).value().map(|v| (child, v)))
                .collect::<Vec<(NodeIndex, Score)>>();
            let exact = candidates.iter().find(|(_, v)| Some(*v) == target);
            let next = exact.copied().or_else(|| {
                candidates
                    .iter()
                    .copied()
                    .reduce(|a, b| if role.pick(a.1, b.1) == a.1 { a } else { b })
            });
            match next {
                Some((child, _)) => node = child,
                None => break,
            }
        }
        path
    }

    /// display the Tree in a human-readable format
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        if x == self.root() {
            writeln!(f, "ROOT   {}", label(self.at(x)))?;
        }
        let children = self.children(x);
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}──{}", prefix, stem, label(self.at(child)))?;
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

/// One-line description of a node for tree drawings.
pub fn label(data: &Data) -> String {
    let value = data
        .value()
        .filter(|_| data.is_leaf() || data.visited())
        .map(symbol)
        .unwrap_or_else(|| "?".to_string());
    let mut text = match data.is_leaf() {
        true => format!("{}", value),
        false => format!("{} {}", data.role(), value),
    };
    if !data.is_leaf() && data.bounded() {
        text.push_str(&format!(" [α={} β={}]", symbol(data.alpha()), symbol(data.beta())));
    }
    if data.pruned() {
        text.push_str(" (pruned)");
    }
    if data.best() {
        text.push_str(" *");
    }
    text
}

impl From<&Leaves> for Tree {
    fn from(leaves: &Leaves) -> Self {
        Self::build(leaves)
    }
}

/// Structural equality: same node data and same ordered children everywhere.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.n() == other.n()
            && self.graph.node_indices().all(|x| {
                self.at(x) == other.at(x) && self.children(x) == other.children(x)
            })
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, self.root(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn tree(s: &str) -> Tree {
        Tree::build(&Leaves::try_from(s).unwrap())
    }
    #[test]
    fn four_leaves_three_levels() {
        let tree = tree("3, 5, 2, 9");
        assert_eq!(tree.n(), 7);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.leaves(), vec![3., 5., 2., 9.]);
        assert_eq!(tree.children(tree.root()).len(), 2);
    }
    #[test]
    fn sixteen_leaves_full_tree() {
        let tree = Tree::build(&Leaves::default());
        assert_eq!(tree.n(), 31);
        assert_eq!(tree.height(), 4);
        assert_eq!(
            tree.leaves(),
            vec![3., 12., 8., 2., 4., 6., 14., 5., 2., 1., 9., 11., 7., 10., 4., 13.]
        );
    }
    #[test]
    fn single_leaf_is_root() {
        let tree = tree("42");
        assert_eq!(tree.n(), 1);
        assert!(tree.at(tree.root()).is_leaf());
        assert_eq!(tree.at(tree.root()).value(), Some(42.));
    }
    #[test]
    fn odd_leaf_count_keeps_every_value() {
        let tree = tree("1, 2, 3, 4, 5");
        assert_eq!(tree.leaves(), vec![1., 2., 3., 4., 5.]);
        assert_eq!(tree.height(), 3);
        // root, 2 MIN, 4 MAX, 5 leaves; the last MAX node stays childless
        assert_eq!(tree.n(), 12);
        let barren = tree
            .all()
            .filter(|(x, d)| !d.is_leaf() && tree.children(*x).is_empty())
            .count();
        assert_eq!(barren, 1);
    }
    #[test]
    fn three_leaves_short_last_node() {
        let tree = tree("7, 8, 9");
        let widths = tree
            .children(tree.root())
            .into_iter()
            .map(|x| tree.children(x).len())
            .collect::<Vec<_>>();
        assert_eq!(widths, vec![2, 1]);
    }
    #[test]
    fn depth_increases_along_edges() {
        let tree = Tree::build(&Leaves::default());
        for (x, data) in tree.all() {
            for child in tree.children(x) {
                assert_eq!(tree.at(child).depth(), data.depth() + 1);
                assert_eq!(tree.parent(child), Some(x));
            }
        }
        assert_eq!(tree.parent(tree.root()), None);
    }
    #[test]
    fn rebuild_is_identical() {
        assert_eq!(tree("4, 1, 7, 3, 9"), tree("4, 1, 7, 3, 9"));
        assert_ne!(tree("4, 1, 7, 3, 9"), tree("4, 1, 7, 3, 8"));
    }
    #[test]
    fn bfs_is_level_order() {
        let tree = tree("3, 5, 2, 9");
        let depths = tree
            .bfs()
            .into_iter()
            .map(|x| tree.at(x).depth())
            .collect::<Vec<_>>();
        assert_eq!(depths, vec![0, 1, 1, 2, 2, 2, 2]);
        assert_eq!(tree.postorder().last(), Some(&tree.root()));
    }
    #[test]
    fn subtree_counts() {
        let tree = Tree::build(&Leaves::default());
        assert_eq!(tree.subtree(tree.root()).len(), 31);
        let left = tree.children(tree.root())[0];
        assert_eq!(tree.subtree(left).len(), 15);
    }
    #[test]
    fn display_draws_stems() {
        let text = tree("3, 5, 2, 9").to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "ROOT   MAX ?");
        assert_eq!(lines[1], "├──MIN ?");
        assert_eq!(lines[2], "│   ├──3");
        assert_eq!(lines.len(), 7);
    }
    #[test]
    fn principal_follows_matching_values() {
        let mut tree = tree("3, 5, 6, 9, 1, 2, 0, -1");
        assert!(tree.principal().is_empty());
        AlphaBeta::search(&mut tree);
        let path = tree.principal();
        assert_eq!(path.iter().map(|x| x.index()).collect::<Vec<_>>(), vec![0, 1, 3, 8]);
        assert!(tree.to_string().lines().any(|l| l.ends_with("5 *")));
        // recomputing replaces the old marks
        tree.principal();
        assert_eq!(tree.all().filter(|(_, d)| d.best()).count(), 4);
    }
}
