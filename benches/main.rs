#[macro_use]
extern crate criterion;

mod skiplist;

criterion_group!(benches, crate::skiplist::benchmark);
criterion_main!(benches);
