use crate::*;
use mmx_core::*;
use mmx_dto::*;

/// Finite scores only; JSON has no room for the sentinels.
fn finite(score: Score) -> Option<f64> {
    Some(score).filter(|s| s.is_finite())
}

impl From<&Tree> for ApiSnapshot {
    fn from(tree: &Tree) -> Self {
        let nodes = tree
            .all()
            .map(|(x, data)| ApiNode {
                id: x.index(),
                parent: tree.parent(x).map(|p| p.index()),
                children: tree.children(x).into_iter().map(|c| c.index()).collect(),
                depth: data.depth(),
                role: data.role().to_string(),
                leaf: data.is_leaf(),
                value: data.value().and_then(finite),
                label: label(data),
                alpha: finite(data.alpha()),
                beta: finite(data.beta()),
                visited: data.visited(),
                pruned: data.pruned(),
                best: data.best(),
            })
            .collect();
        Self {
            root: tree.root().index(),
            nodes,
        }
    }
}

impl From<&Step> for ApiStep {
    fn from(step: &Step) -> Self {
        Self {
            kind: step.kind().to_string(),
            node: step.node().index(),
            role: step.role().map(|r| r.to_string()),
            alpha: finite(step.alpha()),
            beta: finite(step.beta()),
            value: step.value().and_then(finite),
            message: step.to_string(),
        }
    }
}

impl From<&Stats> for ApiStats {
    fn from(stats: &Stats) -> Self {
        Self {
            evaluated: stats.evaluated(),
            pruned: stats.pruned(),
            best: stats.best().and_then(finite),
            efficiency: stats.efficiency(),
            label: stats.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn snapshot_links_parents_and_children() {
        let mut tree = Tree::build(&Leaves::try_from("3, 5, 2, 9").unwrap());
        AlphaBeta::search(&mut tree);
        let snapshot = ApiSnapshot::from(&tree);
        assert_eq!(snapshot.nodes.len(), 7);
        assert_eq!(snapshot.nodes[0].children, vec![1, 2]);
        assert_eq!(snapshot.nodes[6].parent, Some(2));
        assert!(snapshot.nodes[6].pruned);
        assert_eq!(snapshot.nodes[2].alpha, Some(3.));
        assert_eq!(snapshot.nodes[0].beta, None);
    }
    #[test]
    fn sentinels_serialize_as_null() {
        let step = Step::Visit {
            node: NodeIndex::new(0),
            role: Role::Max,
            alpha: Score::NEG_INFINITY,
            beta: Score::INFINITY,
        };
        let json = serde_json::to_value(ApiStep::from(&step)).unwrap();
        assert_eq!(json["alpha"], serde_json::Value::Null);
        assert_eq!(json["role"], "MAX");
        assert_eq!(json["message"], "visit MAX node #0 α=-∞ β=∞");
    }
}
