//! Builds a small tree, prints it, and deletes from it.
//!
//! Run with `RUST_LOG=plain_bst=debug cargo run --example pyramid` to see the tree's diagnostics.

use plain_bst::{Error, Tree};

fn main() {
    env_logger::init();

    let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80, 5].into_iter().collect();
    tree.print();

    match (tree.min(), tree.max()) {
        (Ok(min), Ok(max)) => println!("min = {}, max = {}", min.value(), max.value()),
        _ => println!("tree is empty"),
    }
    println!("height = {}", tree.height());

    for value in [30, 50, 99] {
        match tree.delete(&value) {
            Ok(deleted) => println!("deleted {deleted}"),
            Err(Error::NotFound) => println!("{value} is not in the tree"),
            Err(e) => println!("could not delete {value}: {e}"),
        }
    }
    tree.print();

    match tree.find(&40) {
        Some(node) => println!("found {}", node.value()),
        None => println!("40 is not in the tree"),
    }

    tree.clear();
    if let Err(e) = tree.min() {
        println!("after clear: {e}");
    }
}
