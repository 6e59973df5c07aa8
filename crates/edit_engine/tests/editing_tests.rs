//! Integration tests for the editing engine
//!
//! These exercise whole editing scenarios through the session boundary:
//! batches of commands, undo/redo over them, docking consistency, and
//! the grouping rules.

use canvas_model::{
    Bounds, Canvas, EdgeEnd, EdgeEndpoint, MagnetAnchor, MagnetRef, ModelError, Point, ShapeId,
    Stencil,
};
use edit_engine::{
    AddDocker, Batch, CreateEdge, CreateGroup, CreateNode, DeleteGroup, DeleteShape, EditError,
    EditorSession, MoveDocker, MoveNode, RedockEdge, RemoveDocker, ResizeNode, SetProperty,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Two nodes and an edge docked east-to-west between them
struct Fixture {
    session: EditorSession,
    a: ShapeId,
    b: ShapeId,
    edge: ShapeId,
}

fn connected_pair() -> Fixture {
    let mut session = EditorSession::new();

    let create_a = CreateNode::new(Stencil::node("task"), Bounds::new(0.0, 0.0, 100.0, 50.0));
    let create_b = CreateNode::new(Stencil::node("task"), Bounds::new(200.0, 0.0, 100.0, 50.0));
    let a = create_a.id();
    let b = create_b.id();

    let create_edge = CreateEdge::new(
        Stencil::edge("flow"),
        EdgeEndpoint::Docked(MagnetRef::new(a, MagnetAnchor::East)),
        EdgeEndpoint::Docked(MagnetRef::new(b, MagnetAnchor::West)),
    );
    let edge = create_edge.id();

    session
        .submit_batch(vec![
            Box::new(create_a),
            Box::new(create_b),
            Box::new(create_edge),
        ])
        .unwrap();

    Fixture {
        session,
        a,
        b,
        edge,
    }
}

#[test]
fn test_docked_docker_tracks_node_move_and_undo() {
    let Fixture {
        mut session,
        a,
        edge,
        ..
    } = connected_pair();

    // Dockers start on the magnets
    let e = session.graph().get_edge(edge).unwrap();
    assert_eq!(e.source().position, Point::new(100.0, 25.0));
    assert_eq!(e.target().position, Point::new(200.0, 25.0));

    session
        .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(0.0, 100.0)))])
        .unwrap();

    // Synchronously recomputed: A's east magnet at the new bounds
    assert_eq!(
        session.graph().get_edge(edge).unwrap().source().position,
        Point::new(100.0, 125.0)
    );

    session.undo().unwrap();
    assert_eq!(
        session.graph().get_edge(edge).unwrap().source().position,
        Point::new(100.0, 25.0)
    );
}

#[test]
fn test_group_absorb_and_exact_match_delete() {
    let mut session = EditorSession::new();

    let creates: Vec<CreateNode> = (0..3)
        .map(|i| {
            CreateNode::new(
                Stencil::node("task"),
                Bounds::new(i as f64 * 150.0, 0.0, 100.0, 50.0),
            )
        })
        .collect();
    let ids: Vec<ShapeId> = creates.iter().map(|c| c.id()).collect();
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let batch: Batch = creates
        .into_iter()
        .map(|c| Box::new(c) as Box<dyn edit_engine::Command>)
        .collect();
    session.submit_batch(batch).unwrap();

    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![a, b]))])
        .unwrap();
    assert_eq!(session.groups().len(), 1);

    // G1 intersects {B, C}; it is absorbed wholesale into {A, B, C}
    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![b, c]))])
        .unwrap();
    assert_eq!(session.groups().len(), 1);
    assert_eq!(session.groups().groups()[0].len(), 3);

    // Partial match deletes nothing
    session
        .submit_batch(vec![Box::new(DeleteGroup::new(vec![a, b]))])
        .unwrap();
    assert_eq!(session.groups().len(), 1);

    // Exact match removes the group
    session
        .submit_batch(vec![Box::new(DeleteGroup::new(vec![a, b, c]))])
        .unwrap();
    assert!(session.groups().is_empty());
}

#[test]
fn test_create_group_then_delete_group_restores_prior_list() {
    let mut session = EditorSession::new();

    let creates: Vec<CreateNode> = (0..4)
        .map(|i| {
            CreateNode::new(
                Stencil::node("task"),
                Bounds::new(i as f64 * 150.0, 0.0, 100.0, 50.0),
            )
        })
        .collect();
    let ids: Vec<ShapeId> = creates.iter().map(|c| c.id()).collect();
    let batch: Batch = creates
        .into_iter()
        .map(|c| Box::new(c) as Box<dyn edit_engine::Command>)
        .collect();
    session.submit_batch(batch).unwrap();

    // An existing group disjoint from the upcoming selection
    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![ids[2], ids[3]]))])
        .unwrap();
    let before = session.groups().clone();

    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![ids[0], ids[1]]))])
        .unwrap();
    session
        .submit_batch(vec![Box::new(DeleteGroup::new(vec![ids[0], ids[1]]))])
        .unwrap();

    assert_eq!(session.groups(), &before);
}

#[test]
fn test_remove_docker_at_minimum_fails_atomically() {
    let Fixture {
        mut session, edge, ..
    } = connected_pair();

    let before = session.canvas().clone();
    let result = session.submit_batch(vec![Box::new(RemoveDocker::new(edge, 0))]);

    assert!(matches!(
        result,
        Err(EditError::Model(ModelError::InvariantViolation(_)))
    ));
    assert_eq!(session.canvas(), &before);
    // The failed batch never reached the history
    assert!(!session.can_redo());
    assert!(session.can_undo());
    session.undo().unwrap();
    assert!(!session.can_undo());
}

#[test]
fn test_failing_batch_leaves_canvas_untouched() {
    let Fixture {
        mut session, a, b, ..
    } = connected_pair();

    let before = session.canvas().clone();
    // First command is valid, second references a missing shape
    let result = session.submit_batch(vec![
        Box::new(MoveNode::new(a, Point::new(50.0, 50.0))),
        Box::new(MoveNode::new(ShapeId::new(), Point::new(0.0, 0.0))),
    ]);

    assert!(matches!(
        result,
        Err(EditError::Model(ModelError::ShapeNotFound(_)))
    ));
    assert_eq!(session.canvas(), &before);
    let _ = b;
}

#[test]
fn test_undo_all_redo_all_round_trip() {
    let Fixture {
        mut session,
        a,
        b,
        edge,
    } = connected_pair();

    let initial = session.canvas().clone();

    session
        .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(30.0, 40.0)))])
        .unwrap();
    session
        .submit_batch(vec![
            Box::new(ResizeNode::new(b, 80.0, 120.0)),
            Box::new(SetProperty::new(b, "name", serde_json::json!("Review"))),
        ])
        .unwrap();
    session
        .submit_batch(vec![Box::new(AddDocker::new(
            edge,
            Point::new(150.0, 90.0),
        ))])
        .unwrap();
    session
        .submit_batch(vec![Box::new(MoveDocker::new(
            edge,
            1,
            Point::new(160.0, 10.0),
        ))])
        .unwrap();
    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![a, b]))])
        .unwrap();

    let final_state = session.canvas().clone();
    assert_ne!(initial, final_state);

    while session.can_undo() {
        session.undo().unwrap();
    }
    assert_eq!(session.canvas(), &initial);

    while session.can_redo() {
        session.redo().unwrap();
    }
    assert_eq!(session.canvas(), &final_state);
}

#[test]
fn test_delete_shape_undo_restores_docking_and_groups() {
    let Fixture {
        mut session,
        a,
        b,
        edge,
    } = connected_pair();

    session
        .submit_batch(vec![Box::new(CreateGroup::new(vec![a, b]))])
        .unwrap();
    let before = session.canvas().clone();

    session
        .submit_batch(vec![Box::new(DeleteShape::new(b))])
        .unwrap();

    // The edge survives with its target floated at the magnet's last position
    let e = session.graph().get_edge(edge).unwrap();
    assert!(!e.target().is_docked());
    assert_eq!(e.target().position, Point::new(200.0, 25.0));
    // The two-member group dissolved with its member
    assert!(session.groups().is_empty());

    session.undo().unwrap();
    assert_eq!(session.canvas(), &before);

    session.redo().unwrap();
    assert!(session.graph().get_node(b).is_none());
    assert!(!session
        .graph()
        .get_edge(edge)
        .unwrap()
        .target()
        .is_docked());
}

#[test]
fn test_redock_undo_restores_full_docker_sequence() {
    let Fixture {
        mut session,
        b,
        edge,
        ..
    } = connected_pair();

    let create_c = CreateNode::new(Stencil::node("task"), Bounds::new(400.0, 200.0, 100.0, 50.0));
    let c = create_c.id();
    session.submit_batch(vec![Box::new(create_c)]).unwrap();
    session
        .submit_batch(vec![Box::new(AddDocker::new(
            edge,
            Point::new(150.0, 80.0),
        ))])
        .unwrap();

    let dockers_before = session.graph().get_edge(edge).unwrap().dockers().to_vec();

    session
        .submit_batch(vec![Box::new(RedockEdge::new(
            edge,
            EdgeEnd::Target,
            EdgeEndpoint::Docked(MagnetRef::new(c, MagnetAnchor::North)),
        ))])
        .unwrap();

    let e = session.graph().get_edge(edge).unwrap();
    assert_eq!(e.target().magnet.map(|m| m.node), Some(c));
    assert_eq!(e.target().position, Point::new(450.0, 200.0));
    // Interior bend point untouched by the reconnection
    assert_eq!(e.dockers()[1].position, Point::new(150.0, 80.0));

    session.undo().unwrap();
    let e = session.graph().get_edge(edge).unwrap();
    assert_eq!(e.dockers(), &dockers_before[..]);
    assert_eq!(e.target().magnet.map(|m| m.node), Some(b));
}

#[test]
fn test_new_batch_clears_redo_history() {
    let Fixture {
        mut session, a, ..
    } = connected_pair();

    session
        .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(10.0, 10.0)))])
        .unwrap();
    session.undo().unwrap();
    assert!(session.can_redo());

    session
        .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(20.0, 20.0)))])
        .unwrap();
    assert!(!session.can_redo());
}

#[test]
fn test_change_notification_fires_once_per_action() {
    let Fixture {
        mut session, a, ..
    } = connected_pair();

    let counter = Arc::new(AtomicUsize::new(0));
    let observed = counter.clone();
    session.on_change(move || {
        observed.fetch_add(1, Ordering::SeqCst);
    });

    session
        .submit_batch(vec![
            Box::new(MoveNode::new(a, Point::new(10.0, 10.0))),
            Box::new(ResizeNode::new(a, 60.0, 60.0)),
        ])
        .unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    session.undo().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    session.redo().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    // Failed submissions do not notify
    let _ = session.submit_batch(vec![]);
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[test]
fn test_load_graph_replaces_canvas_and_clears_history() {
    let Fixture {
        mut session, a, ..
    } = connected_pair();

    session
        .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(10.0, 10.0)))])
        .unwrap();
    session.undo().unwrap();
    assert!(session.can_undo() || session.can_redo());

    session.load_graph(canvas_model::DiagramGraph::new());
    assert_eq!(session.canvas(), &Canvas::new());
    assert!(!session.can_undo());
    assert!(!session.can_redo());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Edit {
        MoveA(i32, i32),
        MoveB(i32, i32),
        ResizeA(u16, u16),
        Bend(i32, i32),
    }

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (-500..500i32, -500..500i32).prop_map(|(x, y)| Edit::MoveA(x, y)),
            (-500..500i32, -500..500i32).prop_map(|(x, y)| Edit::MoveB(x, y)),
            (1..300u16, 1..300u16).prop_map(|(w, h)| Edit::ResizeA(w, h)),
            (-500..500i32, -500..500i32).prop_map(|(x, y)| Edit::Bend(x, y)),
        ]
    }

    proptest! {
        /// Undoing all batches restores the initial canvas exactly and
        /// redoing them all restores the final canvas exactly.
        #[test]
        fn prop_undo_all_redo_all(edits in proptest::collection::vec(edit_strategy(), 1..20)) {
            let Fixture { mut session, a, b, edge } = connected_pair();
            let initial = session.canvas().clone();

            for edit in &edits {
                let batch: Batch = match *edit {
                    Edit::MoveA(x, y) => {
                        vec![Box::new(MoveNode::new(a, Point::new(x as f64, y as f64)))]
                    }
                    Edit::MoveB(x, y) => {
                        vec![Box::new(MoveNode::new(b, Point::new(x as f64, y as f64)))]
                    }
                    Edit::ResizeA(w, h) => {
                        vec![Box::new(ResizeNode::new(a, w as f64, h as f64))]
                    }
                    Edit::Bend(x, y) => {
                        vec![Box::new(AddDocker::new(edge, Point::new(x as f64, y as f64)))]
                    }
                };
                session.submit_batch(batch).unwrap();
            }
            let final_state = session.canvas().clone();

            while session.can_undo() {
                session.undo().unwrap();
            }
            prop_assert_eq!(session.canvas(), &initial);

            while session.can_redo() {
                session.redo().unwrap();
            }
            prop_assert_eq!(session.canvas(), &final_state);
        }

        /// After any node move, every docker docked to that node sits
        /// exactly on its magnet's recomputed position.
        #[test]
        fn prop_docked_dockers_never_stale(x in -1000..1000i32, y in -1000..1000i32) {
            let Fixture { mut session, a, edge, .. } = connected_pair();

            session
                .submit_batch(vec![Box::new(MoveNode::new(a, Point::new(x as f64, y as f64)))])
                .unwrap();

            let node = session.graph().get_node(a).unwrap();
            let expected = node.magnet_position(MagnetAnchor::East).unwrap();
            let actual = session.graph().get_edge(edge).unwrap().source().position;
            prop_assert_eq!(actual, expected);
        }
    }
}
