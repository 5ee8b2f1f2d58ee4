use cmp_bst::{by_key, Order, Tree};

use std::cmp::Ordering;
use std::collections::HashSet;

fn keys_in<C>(tree: &Tree<i8, C>, order: Order) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.traverse(order, |key| keys.push(*key));
    keys
}

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.add(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        let mut sorted = xs;
        sorted.sort_unstable();
        keys_in(&tree, Order::InOrder) == sorted
    }
}

quickcheck::quickcheck! {
    fn every_order_visits_every_node_once(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        let mut expected = xs.clone();
        expected.sort_unstable();
        [Order::InOrder, Order::PreOrder, Order::PostOrder]
            .into_iter()
            .all(|order| {
                let mut keys = keys_in(&tree, order);
                keys.sort_unstable();
                keys == expected
            })
            && tree.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn pre_order_starts_and_post_order_ends_at_first_key(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        keys_in(&tree, Order::PreOrder).first() == xs.first()
            && keys_in(&tree, Order::PostOrder).last() == xs.first()
    }
}

quickcheck::quickcheck! {
    fn min_and_max_bound_the_in_order_sequence(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let keys = keys_in(&tree, Order::InOrder);

        tree.min() == keys.first() && tree.max() == keys.last()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        let mut still_present = xs;
        for removal in &removals {
            // We may have added the same key multiple times - remove each one.
            while tree.remove(removal) {}
            still_present.retain(|x| x != removal);
        }

        still_present.sort_unstable();
        removals.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && keys_in(&tree, Order::InOrder) == still_present
    }
}

quickcheck::quickcheck! {
    fn removing_absent_key_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
        let xs: Vec<_> = xs.into_iter().filter(|x| *x != absent).collect();
        let mut tree = tree_of(&xs);
        let before = keys_in(&tree, Order::PreOrder);

        !tree.remove(&absent) && keys_in(&tree, Order::PreOrder) == before
    }
}

quickcheck::quickcheck! {
    fn reversed_comparator_sorts_descending(xs: Vec<i8>) -> bool {
        let mut tree = Tree::with_comparator(|a: &i8, b: &i8| b.cmp(a));
        for x in &xs {
            tree.add(*x);
        }

        let mut sorted = xs;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        keys_in(&tree, Order::InOrder) == sorted
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<i8>, removals: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        let cloned = tree.clone();
        let before = keys_in(&tree, Order::PreOrder);
        for removal in &removals {
            tree.remove(removal);
        }

        keys_in(&cloned, Order::PreOrder) == before
    }
}

#[derive(Clone, Debug)]
struct Person {
    name: String,
    age: u8,
}

quickcheck::quickcheck! {
    fn field_comparator_finds_by_field_only(ages: Vec<u8>) -> bool {
        let mut tree = Tree::with_comparator(by_key(|p: &Person| p.age));
        for (i, age) in ages.iter().enumerate() {
            tree.add(Person { name: format!("person {i}"), age: *age });
        }

        let mut visited = Vec::new();
        tree.in_order(|p| visited.push(p.age));

        visited.windows(2).all(|w| w[0].cmp(&w[1]) != Ordering::Greater)
            && ages.iter().all(|age| {
                let stranger = Person { name: String::from("stranger"), age: *age };
                tree.get(&stranger).map(|p| p.age) == Some(*age)
                    && tree.get(&stranger).map(|p| p.name != stranger.name) == Some(true)
            })
    }
}
