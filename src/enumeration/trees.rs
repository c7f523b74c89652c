use log::debug;

/// Shape of a full binary tree over ordered leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeShape {
    Leaf,
    Node(Box<TreeShape>, Box<TreeShape>),
}

impl TreeShape {
    pub fn leaves(&self) -> usize {
        match self {
            TreeShape::Leaf => 1,
            TreeShape::Node(l, r) => l.leaves() + r.leaves(),
        }
    }

    /// Buffer positions that reduce this tree one adjacent pair at a time.
    ///
    /// Positions are absolute indices into the shrinking buffer, in post-order:
    /// the left subtree collapses first, then the right, then the root joins them.
    pub fn reduction_positions(&self) -> Vec<usize> {
        fn walk(tree: &TreeShape, start: usize, out: &mut Vec<usize>) {
            if let TreeShape::Node(l, r) = tree {
                walk(l, start, out);
                // the left subtree now occupies a single slot at `start`
                walk(r, start + 1, out);
                out.push(start);
            }
        }

        let mut positions = Vec::with_capacity(self.leaves().saturating_sub(1));
        walk(self, 0, &mut positions);
        positions
    }
}

/// Every full binary tree with `leaves` leaves, smaller left subtrees first.
pub fn tree_shapes(leaves: usize) -> Vec<TreeShape> {
    match leaves {
        0 => Vec::new(),
        1 => vec![TreeShape::Leaf],
        _ => {
            let mut shapes = Vec::new();
            for left_leaves in 1..leaves {
                let lefts = tree_shapes(left_leaves);
                let rights = tree_shapes(leaves - left_leaves);
                for left in &lefts {
                    for right in &rights {
                        shapes.push(TreeShape::Node(
                            Box::new(left.clone()),
                            Box::new(right.clone()),
                        ));
                    }
                }
            }
            debug!("Generated {} tree shapes over {} leaves", shapes.len(), leaves);
            shapes
        }
    }
}
