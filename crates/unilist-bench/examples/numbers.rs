//! Walkthrough of the positional and keyed surface with integer elements.
//!
//! Run with: `cargo run -p unilist-bench --example numbers`

use unilist::UniList;

fn print_all(label: &str, list: &UniList<i32>) {
    let mut items = Vec::with_capacity(list.len());
    list.traverse(|&elem| items.push(elem.to_string()));
    println!("{label}: [{}] (len {})", items.join(", "), list.len());
}

fn main() {
    let mut list = UniList::new();
    for n in 1..=10 {
        list.push_back(n);
    }
    print_all("appended 1..=10", &list);

    list.insert(6, 1989);
    print_all("insert 1989 at 6", &list);

    list.remove(6).expect("index 6 is in bounds");
    print_all("remove index 6", &list);

    list.remove_by_key(&3, |elem, key| elem == key)
        .expect("3 is present");
    print_all("remove key 3", &list);

    list.reverse();
    print_all("reversed", &list);

    // Keyed bulk lookups over a duplicate-heavy sample.
    let mut fives = UniList::new();
    for v in [5, 3, 5, 1, 5] {
        fives.push_back(v);
    }
    print_all("duplicates", &fives);
    match fives.find_all_indices(&5, |elem, key| elem == key) {
        Some(indices) => {
            let mut positions = Vec::with_capacity(indices.len());
            indices.traverse(|&index| positions.push(index.to_string()));
            println!("indices of 5: [{}]", positions.join(", "));
        }
        None => println!("indices of 5: none"),
    }
    let removed = fives.remove_all_by_key(&5, |elem, key| elem == key);
    println!("removed {removed} fives");
    print_all("after bulk removal", &fives);

    list.clear();
    print_all("cleared", &list);
}
