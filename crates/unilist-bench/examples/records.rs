//! Boxed-record walkthrough: elements own separately allocated data and
//! the disposer is the single release point.
//!
//! Run with: `cargo run -p unilist-bench --example records`

use unilist::UniList;

#[derive(Debug)]
struct Student {
    name: String,
    num: u32,
}

fn main() {
    let mut roster: UniList<Box<Student>> = UniList::with_disposer(|student: Box<Student>| {
        println!("releasing record #{} ({})", student.num, student.name);
    });

    roster.push_front(Box::new(Student {
        name: "bob".to_owned(),
        num: 1,
    }));
    roster.push_back(Box::new(Student {
        name: "lucy".to_owned(),
        num: 2,
    }));
    roster.insert(
        1,
        Box::new(Student {
            name: "john".to_owned(),
            num: 3,
        }),
    );

    roster.reverse();

    println!("roster ({} records):", roster.len());
    roster.traverse(|student| println!("  name: {}  num: {}", student.name, student.num));

    if let Ok(index) = roster.find_index(&"john", |student, key| student.name == *key) {
        println!("john sits at index {index}");
    }

    // Explicit clear releases every record through the disposer; dropping
    // the handle afterwards has nothing left to do.
    roster.clear();
}
