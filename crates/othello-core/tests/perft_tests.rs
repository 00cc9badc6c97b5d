use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    let expected = [4, 12, 56, 244, 1_396, 8_200, 55_092];
    for (depth, &nodes) in (1..).zip(expected.iter()) {
        assert_eq!(perft_root(depth), nodes, "perft mismatch at depth {depth}");
    }
}
