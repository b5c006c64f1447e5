use cest::alloc::Limited;
use cest::collections::contiguous::{StringBuf, Vector};
use cest::collections::linked::LinkedList;

fn main() {
    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new_in(Limited::default());
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    println!("{list}");
    println!("{:?} (size {})", list, list.size());

    list.pop_back();
    println!("{list}");

    list.begin_mut().erase();
    println!("{list}");

    list.pop_front();
    println!("{:?}, empty: {}", list, list.is_empty());

    let mut cursor = list.end_mut();
    cursor.insert_iter(1..=3).insert_n(2, 0);
    println!("{list}");
    println!("Live nodes: {}", list.allocator().live());

    let mut cursor = list.end();
    print!("Backwards:");
    while cursor.move_prev() != &list.end() {
        print!(" {}", cursor.get());
    }
    println!();

    println!("\n[Vector]\n");

    let mut vec = Vector::new_in(Limited::default());
    for i in 0..9 {
        vec.push_back(i);
        println!(
            "len {}, cap {}, blocks allocated {}",
            vec.len(),
            vec.capacity(),
            vec.allocator().total()
        );
    }
    vec.erase(2..5);
    println!("{vec:?}");

    println!("\n[StringBuf]\n");

    let mut buf: StringBuf = StringBuf::from("cest");
    buf.push_str(", la vie");
    println!("{buf} ({buf:?})");
}
