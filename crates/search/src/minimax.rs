use crate::*;
use mmx_core::*;
use petgraph::graph::NodeIndex;

/// Exhaustive minimax. Every node is visited exactly once; nothing is pruned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Recursive minimax from `node`, whose role must match its depth parity.
    pub fn minimax(tree: &mut Tree, node: NodeIndex, role: Role, trace: &mut Trace) -> Score {
        debug_assert_eq!(role, tree.at(node).role(), "role drifted from depth");
        let data = tree.at(node).clone();
        trace.push(Step::Visit {
            node,
            role,
            alpha: data.alpha(),
            beta: data.beta(),
        });
        if data.is_leaf() {
            let value = data.value().expect("leaves carry values");
            tree.at_mut(node).settle(value);
            return value;
        }
        let value = tree
            .children(node)
            .into_iter()
            .map(|child| Self::minimax(tree, child, !role, trace))
            .fold(role.identity(), |acc, v| role.pick(acc, v));
        tree.at_mut(node).settle(value);
        trace.push(Step::Backtrack {
            node,
            alpha: data.alpha(),
            beta: data.beta(),
            value,
        });
        value
    }
}

impl Search for Minimax {
    const NAME: &'static str = "minimax";
    const PRUNES: bool = false;
    fn walk(tree: &mut Tree, trace: &mut Trace) -> Score {
        let root = tree.root();
        let role = tree.at(root).role();
        Self::minimax(tree, root, role, trace)
    }
}
