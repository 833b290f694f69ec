use ordtree::{Tree, TreeError};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn successor_and_predecessor_are_adjacent(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.iter().copied().collect();

    sorted.windows(2).all(|pair| {
        let (p, s) = (tree.find(&pair[0]), tree.find(&pair[1]));
        tree.successor(p) == Ok(s) && tree.predecessor(s) == Ok(p)
    })
}

#[quickcheck]
fn walking_backwards_reverses_walking_forwards(xs: Vec<i8>) -> Result<bool, TreeError> {
    let tree: Tree<_> = xs.into_iter().collect();

    let mut forwards = Vec::new();
    let mut cursor = tree.begin();
    while cursor != tree.end() {
        forwards.push(*tree.get(cursor)?);
        cursor.advance(&tree)?;
    }

    let mut backwards = Vec::new();
    cursor.retreat(&tree)?;
    while cursor != tree.end() {
        backwards.push(*tree.get(cursor)?);
        cursor.retreat(&tree)?;
    }
    backwards.reverse();

    Ok(forwards == backwards && tree.iter().copied().eq(forwards))
}

#[quickcheck]
fn removal_only_invalidates_the_removed_cursor(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let survivors: Vec<_> = tree.iter().copied().filter(|&y| y != x).collect();
    let cursors: Vec<_> = survivors.iter().map(|y| tree.find(y)).collect();
    let removed = tree.find(&x);

    tree.remove(&x);

    tree.get(removed) == Err(TreeError::StaleCursor)
        && survivors
            .iter()
            .zip(cursors)
            .all(|(y, cursor)| tree.get(cursor) == Ok(y))
}
