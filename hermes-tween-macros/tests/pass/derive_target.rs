use hermes_tween::utils::Value;
use hermes_tween::Target;

#[derive(Target)]
struct Empty {}

#[derive(Target)]
struct Tagged<T: Send + Sync> {
    x: f64,
    #[target(skip)]
    tag: T,
}

#[derive(Target)]
pub struct Mixed {
    pub a: u8,
    pub b: i64,
    pub c: usize,
    pub list: Vec<f32>,
}

fn main() {
    let mut empty = Empty {};
    empty.set("x", 1.0);
    assert_eq!(empty.get("x"), None);

    let mut tagged = Tagged { x: 0.0, tag: "tag" };
    tagged.set("x", 2.0);
    assert_eq!(tagged.get("x"), Some(Value::Number(2.0)));
    assert_eq!(tagged.tag, "tag");

    let mixed = Mixed {
        a: 1,
        b: -1,
        c: 2,
        list: vec![0.5],
    };
    assert_eq!(mixed.get("list"), Some(Value::Array(vec![0.5])));
}
