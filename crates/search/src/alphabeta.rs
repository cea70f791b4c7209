use crate::*;
use mmx_core::*;
use petgraph::graph::NodeIndex;

/// Minimax with alpha-beta cutoffs.
///
/// Once `beta <= alpha` at a node, every remaining child is pruned along
/// with its entire subtree. The subtree marking is unconditional: it records
/// which branches were skipped, not which nodes a deeper analysis would have
/// cut on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    /// Recursive alpha-beta from `node` within the window `(alpha, beta)`.
    pub fn alpha_beta(
        tree: &mut Tree,
        node: NodeIndex,
        mut alpha: Score,
        mut beta: Score,
        role: Role,
        trace: &mut Trace,
    ) -> Score {
        debug_assert_eq!(role, tree.at(node).role(), "role drifted from depth");
        tree.at_mut(node).bound(alpha, beta);
        trace.push(Step::Visit {
            node,
            role,
            alpha,
            beta,
        });
        if tree.at(node).is_leaf() {
            let value = tree.at(node).value().expect("leaves carry values");
            tree.at_mut(node).settle(value);
            return value;
        }
        let children = tree.children(node);
        let mut best = role.identity();
        for (i, child) in children.iter().enumerate() {
            let value = Self::alpha_beta(tree, *child, alpha, beta, !role, trace);
            best = role.pick(best, value);
            match role {
                Role::Max => alpha = alpha.max(value),
                Role::Min => beta = beta.min(value),
            }
            if beta <= alpha {
                for sibling in children.iter().skip(i + 1) {
                    let n = tree.prune(*sibling);
                    log::trace!("cutoff at #{} skips #{} ({} nodes)", node.index(), sibling.index(), n);
                    trace.push(Step::Prune {
                        node: *sibling,
                        alpha,
                        beta,
                    });
                }
                break;
            }
        }
        tree.at_mut(node).settle(best);
        trace.push(Step::Backtrack {
            node,
            alpha,
            beta,
            value: best,
        });
        best
    }
}

impl Search for AlphaBeta {
    const NAME: &'static str = "alpha-beta";
    const PRUNES: bool = true;
    fn walk(tree: &mut Tree, trace: &mut Trace) -> Score {
        let root = tree.root();
        let role = tree.at(root).role();
        Self::alpha_beta(tree, root, Score::NEG_INFINITY, Score::INFINITY, role, trace)
    }
}
