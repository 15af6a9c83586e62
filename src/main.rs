use dynamic_array::collections::contiguous::DynamicArray;

#[derive(Debug, Clone, PartialEq)]
struct MyZST;

fn main() {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::<u8>::new();
    println!("{:?}", arr);

    for i in 1..=3 {
        arr.push_back(i);
        println!("{:?}", arr);
    }

    arr.insert(1, 99);
    println!("{}", arr);

    println!("{:?}, {}", arr.erase(0), arr);
    println!("front: {:?}, back: {:?}", arr.front(), arr.back());

    match arr.at(7) {
        Ok(value) => println!("at(7): {value}"),
        Err(err) => println!("at(7) failed: {err}"),
    }

    println!("\n[Growth]\n");

    for i in 4..=12 {
        arr.push_back(i);
    }
    println!("{:?}", arr);

    arr.clear();
    println!("{:?}", arr);
    println!("{:?}", arr.pop_back());

    println!("\n[ZST]\n");

    let mut arr = DynamicArray::<MyZST>::new();
    for _ in 0..11 {
        arr.push_back(MyZST);
    }
    println!("{:?}", arr);
}
