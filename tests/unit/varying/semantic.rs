use super::*;
use crate::varying::ir::{add, lerp, literal, multiply, random, symbol};
use std::cell::RefCell;

/// Records the order in which handlers fire.
#[derive(Default)]
struct Trace(RefCell<Vec<&'static str>>);

impl VaryingSemantic for Trace {
    type Output = ();

    fn symbol(&self, _node: &VaryingNode) {
        self.0.borrow_mut().push("t");
    }

    fn random(&self, _node: &VaryingNode) {
        self.0.borrow_mut().push("rand");
    }

    fn literal(&self, _node: &VaryingNode, _value: f32) {
        self.0.borrow_mut().push("lit");
    }

    fn add(&self, _node: &VaryingNode, _left: (), _right: ()) {
        self.0.borrow_mut().push("add");
    }

    fn multiply(&self, _node: &VaryingNode, _left: (), _right: ()) {
        self.0.borrow_mut().push("mul");
    }

    fn lerp(&self, _node: &VaryingNode, _x: (), _y: (), _s: ()) {
        self.0.borrow_mut().push("lerp");
    }
}

#[test]
fn fold_is_post_order_and_visits_each_node_once() {
    let tree = add(literal(1.0), multiply(symbol(), random()));
    let trace = Trace::default();
    evaluate(&tree, &trace);
    assert_eq!(*trace.0.borrow(), vec!["lit", "t", "rand", "mul", "add"]);
}

#[test]
fn lerp_operands_fold_in_x_y_s_order() {
    let tree = lerp(literal(0.0), symbol(), random());
    let trace = Trace::default();
    tree.evaluate(&trace);
    assert_eq!(*trace.0.borrow(), vec!["lit", "t", "rand", "lerp"]);
}

#[test]
fn rebuild_round_trips() {
    let tree = lerp(add(symbol(), literal(2.0)), random(), multiply(symbol(), symbol()));
    assert_eq!(rebuild(&tree), tree);
}

#[test]
fn handlers_see_the_original_node() {
    struct IsLeafAdd;
    impl VaryingSemantic for IsLeafAdd {
        type Output = bool;
        fn symbol(&self, _node: &VaryingNode) -> bool {
            false
        }
        fn random(&self, _node: &VaryingNode) -> bool {
            false
        }
        fn literal(&self, _node: &VaryingNode, _value: f32) -> bool {
            false
        }
        fn add(&self, node: &VaryingNode, _l: bool, _r: bool) -> bool {
            matches!(node, VaryingNode::Add(l, r)
                if matches!(**l, VaryingNode::Literal(_)) && matches!(**r, VaryingNode::Symbol))
        }
        fn multiply(&self, _node: &VaryingNode, l: bool, r: bool) -> bool {
            l || r
        }
        fn lerp(&self, _node: &VaryingNode, x: bool, y: bool, s: bool) -> bool {
            x || y || s
        }
    }

    assert!(multiply(add(literal(1.0), symbol()), symbol()).evaluate(&IsLeafAdd));
    assert!(!multiply(add(symbol(), literal(1.0)), symbol()).evaluate(&IsLeafAdd));
}
