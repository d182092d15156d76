//! 端到端测试：路径查询与并发访问

use rand::Rng;
use rayon::prelude::*;
use simplegraph::{
    graph_factory, synchronized_graph_factory, DirectedGraph, Edge, Error, Graph, GraphFactory,
    SynchronizedGraph, UndirectedGraph,
};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TestVertex {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

use TestVertex::*;

fn u(a: TestVertex, b: TestVertex, w: u32) -> Edge<TestVertex> {
    Edge::undirected(a, b, w).unwrap()
}

fn seven_vertex_edges() -> Vec<Edge<TestVertex>> {
    vec![
        u(A, B, 5),
        u(A, D, 7),
        u(A, D, 10),
        u(A, E, 12),
        u(B, E, 3),
        u(B, F, 7),
        u(B, F, 10),
        u(E, C, 5),
        u(C, F, 7),
        u(D, F, 15),
    ]
}

#[test]
fn test_single_edge_and_string_vertices() {
    let graph = graph_factory()
        .create_directed_graph_with(
            ["A", "B", "C"],
            [Edge::undirected("A", "B", 10).unwrap()],
        )
        .unwrap();

    assert_eq!(
        graph.get_path(&"A", &"B"),
        vec![Edge::undirected("A", "B", 10).unwrap()]
    );
    assert!(graph.get_path(&"A", &"C").is_empty());
}

#[test]
fn test_undirected_edges_graph() {
    let graph = graph_factory()
        .create_directed_graph_with([A, B, C, D, E, F, G], seven_vertex_edges())
        .unwrap();

    assert_eq!(
        graph.get_path(&A, &C),
        vec![u(A, B, 5), u(B, E, 3), u(E, C, 5)]
    );
}

#[test]
fn test_undirected_graph_same_result() {
    let graph = graph_factory()
        .create_undirected_graph_with([A, B, C, D, E, F, G], seven_vertex_edges())
        .unwrap();

    let path = graph.shortest_path(&A, &C).unwrap();
    assert_eq!(path.total_weight, 13);
    assert_eq!(path.vertices, vec![A, B, E, C]);
}

#[test]
fn test_undirected_and_directed_edge_pair() {
    let graph = graph_factory()
        .create_directed_graph_with(
            ["A", "B"],
            [Edge::undirected_unit("A", "B"), Edge::directed_unit("A", "B")],
        )
        .unwrap();

    assert_eq!(graph.get_path(&"B", &"A"), vec![Edge::undirected_unit("A", "B")]);
}

#[test]
fn test_same_vertex_path_is_empty_for_every_vertex() {
    let graph = graph_factory()
        .create_undirected_graph_with([A, B, C, D, E, F, G], seven_vertex_edges())
        .unwrap();

    for v in [A, B, C, D, E, F, G] {
        assert!(graph.get_path(&v, &v).is_empty());
    }
}

#[test]
fn test_add_vertex_and_edge() {
    let mut undirected = graph_factory().create_undirected_graph::<TestVertex>();
    undirected.add_vertex(G);
    assert_eq!(undirected.vertex_count(), 1);

    let directed = synchronized_graph_factory().create_directed_graph::<TestVertex>();
    directed.add_edge(Edge::undirected_unit(A, E)).unwrap();
    directed.add_edge(Edge::directed(A, C, 10).unwrap()).unwrap();
    assert_eq!(directed.edge_count(), 2);
    assert_eq!(directed.get_path(&E, &C).len(), 2);
}

#[test]
fn test_rejected_edge_leaves_graph_unchanged() {
    let mut graph: UndirectedGraph<TestVertex> = UndirectedGraph::new();
    graph.add_edge(u(A, B, 1)).unwrap();

    let before_vertices: Vec<_> = graph.vertices().copied().collect();
    let before_edges: Vec<_> = graph.edges().cloned().collect();

    let err = graph
        .add_edge(Edge::directed(B, C, 1).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::OrientationMismatch(_)));

    assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), before_vertices);
    assert_eq!(graph.edges().cloned().collect::<Vec<_>>(), before_edges);
    assert_eq!(graph.out_degree(&B), 1);
}

#[test]
fn test_traverse_applies_function_to_each_vertex() {
    let graph = synchronized_graph_factory()
        .create_directed_graph_with(
            ["A", "B"],
            [Edge::undirected_unit("A", "B"), Edge::directed_unit("A", "B")],
        )
        .unwrap();

    let results = graph.traverse(|v| format!("{v}{v}"));
    let vertices = graph.read_with(|g| g.vertices().copied().collect::<Vec<_>>());

    assert_eq!(results.len(), graph.vertex_count());
    for (vertex, result) in vertices.iter().zip(&results) {
        assert_eq!(result, &format!("{vertex}{vertex}"));
    }
}

#[test]
fn test_concurrent_readers() {
    let graph = synchronized_graph_factory()
        .create_undirected_graph_with([A, B, C, D, E, F, G], seven_vertex_edges())
        .unwrap();
    let expected = vec![u(A, B, 5), u(B, E, 3), u(E, C, 5)];

    let paths: Vec<_> = (0..256)
        .into_par_iter()
        .map(|_| graph.get_path(&A, &C))
        .collect();
    assert!(paths.iter().all(|p| *p == expected));

    let traversals: Vec<_> = (0..256)
        .into_par_iter()
        .map(|_| graph.traverse(|v| *v))
        .collect();
    assert!(traversals.iter().all(|t| t.len() == 7));
}

#[test]
fn test_writer_never_observed_half_applied() {
    const CHAIN: u32 = 200;
    let graph: SynchronizedGraph<DirectedGraph<u32>> = SynchronizedGraph::new(DirectedGraph::new());

    crossbeam::scope(|s| {
        s.spawn(|_| {
            for i in 0..CHAIN {
                let edge = if i % 2 == 0 {
                    Edge::directed(i, i + 1, 1).unwrap()
                } else {
                    Edge::undirected(i, i + 1, 1).unwrap()
                };
                graph.add_edge(edge).unwrap();
            }
        });

        for _ in 0..4 {
            s.spawn(|_| {
                let mut rng = rand::thread_rng();
                for _ in 0..200 {
                    // 每条已提交的边都必须同时出现在边集、出边索引和入边索引中
                    graph.read_with(|g| {
                        for edge in g.edges() {
                            assert!(g.outgoing_edges(edge.source()).any(|e| e == edge));
                            assert!(g.incoming_edges(edge.destination()).any(|e| e == edge));
                            if edge.is_undirected() {
                                assert!(g.outgoing_edges(edge.destination()).any(|e| e == edge));
                                assert!(g.incoming_edges(edge.source()).any(|e| e == edge));
                            }
                        }
                    });

                    // 边按链条顺序加入，路径要么不存在，要么完整
                    let target = rng.gen_range(1..=CHAIN);
                    let path = graph.get_path(&0, &target);
                    if !path.is_empty() {
                        assert_eq!(path.len() as u32, target);
                        for (i, edge) in path.iter().enumerate() {
                            let i = i as u32;
                            assert!(edge.connects_vertices(&i, &(i + 1)));
                        }
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(graph.edge_count(), CHAIN as usize);
    assert_eq!(graph.get_path(&0, &CHAIN).len(), CHAIN as usize);
    // 奇数位置是无向边，只能反向走过有限的一段
    assert!(graph.get_path(&CHAIN, &0).is_empty());
}

#[test]
fn test_concurrent_vertex_adds_are_idempotent() {
    let graph = synchronized_graph_factory().create_undirected_graph::<u32>();

    (0..1000u32).into_par_iter().for_each(|i| {
        graph.add_vertex(i % 100);
    });

    assert_eq!(graph.vertex_count(), 100);
    let seen: HashSet<u32> = graph.traverse(|v| *v).into_iter().collect();
    assert_eq!(seen, (0..100).collect());
}
