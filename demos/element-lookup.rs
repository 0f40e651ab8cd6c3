use vessel::prelude::*;

#[tokio::main]
async fn main() {
    let registry = Registry::new();
    registry.insert(Element::new("div", "welcome to the index page").with_id("app"));
    registry.insert(Element::new("span", "footer"));

    // Look the element up through the async seam, the way an environment
    // query primitive would be consumed.
    let selector = Selector::parse("div#app").value();
    let element = registry.find_element(&selector).await;

    let rendered = element.match_with(
        |element| format!("<{}>{}</{}>", element.tag, element.content, element.tag),
        || String::from("element not found"),
    );

    println!("{}", rendered);

    // Absence and malformed input travel on different channels.
    println!("missing element: {:?}", registry.query("nav"));
    println!("malformed selector: {:?}", registry.query("nav bar"));
}
