extern crate dot;

use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::parser::*;

/// Parse tree of a formula laid out for GraphViz. Equal subtrees share a node.
pub struct SymbolicParseTree {
    pub internal_tree: Expression,
    pub nodes: Vec<Expression>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl SymbolicParseTree {
    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    fn nodes_recursive(root: &Expression) -> Vec<Expression> {
        let this_node = vec![root.clone()];

        match root {
            Expression::BinaryOp(_, l, r) => {
                let left_nodes = Self::nodes_recursive(l);
                let right_nodes = Self::nodes_recursive(r);

                left_nodes
                    .into_iter()
                    .chain(right_nodes)
                    .chain(this_node)
                    .collect()
            }
            Expression::Not(f) => {
                let new_nodes = Self::nodes_recursive(f);

                new_nodes.into_iter().chain(this_node).collect()
            }
            Expression::Var(_) => this_node,
        }
    }

    pub fn new(src: &Expression) -> Self {
        Self {
            internal_tree: src.clone(),
            nodes: Self::nodes_recursive(src).into_iter().unique().collect(),
        }
    }

    fn position(&self, node: &Expression) -> usize {
        self.nodes
            .iter()
            .position(|n| n == node)
            .expect("every subtree is collected as a node")
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for SymbolicParseTree {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("parse_tree").expect("cannot create Id named 'parse_tree'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        match &self.nodes[*n] {
            Expression::BinaryOp(op, _, _) => dot::LabelText::label(format!("{:?} {}", op, op)),
            Expression::Not(_) => dot::LabelText::label("Not ¬".to_string()),
            Expression::Var(v) => dot::LabelText::label(format!("Var {}", v)),
        }
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for SymbolicParseTree {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        let mut edges: Vec<GraphEdge> = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Expression::BinaryOp(_, l, r) => {
                    edges.push((i, "L".to_string(), self.position(l)));
                    edges.push((i, "R".to_string(), self.position(r)));
                }
                Expression::Not(f) => {
                    edges.push((i, "".to_string(), self.position(f)));
                }
                Expression::Var(_) => {}
            }
        }

        edges.into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
