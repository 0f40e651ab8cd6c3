use vessel::prelude::*;

fn index(_path: &str) -> String {
    String::from("<h1>index</h1>")
}

fn not_found(path: &str) -> String {
    format!("<h1>no page at {}</h1>", path)
}

// The wildcard arm keeps the dispatcher total; without it, an unknown path
// would abort with an unexhaustive-match panic.
fn dispatch(path: &str) -> String {
    let arms: Vec<MatchArm<&str, String>> = vec![
        (Pattern::Literal("/"), |path| index(path)),
        (Pattern::Any, |path| not_found(path)),
    ];

    match_equal(path, arms)
}

fn main() {
    println!("{}", dispatch("/"));
    println!("{}", dispatch("/missing"));
}
