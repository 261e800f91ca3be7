//! Parameterized locator walkthrough against the in-memory driver.
//!
//! Run with: `cargo run --example locator_demo`

use std::sync::Arc;
use std::time::Duration;

use actuar::prelude::*;
use actuar::{FluentFinder, MemorySink, MockDriver, MockElementSpec, Timeouts};

#[tokio::main]
async fn main() -> ActuarResult<()> {
    actuar::init_tracing();

    // Stage a tiny "page" in the mock driver.
    let driver = Arc::new(MockDriver::new());
    driver.set_title("Example Blog");
    driver.stage_element("//a[@href=\"/blog\"]", MockElementSpec::new());
    driver.stage_element(
        "//section[@class='blog-post' and contains(., 'Hello, world')]//a",
        MockElementSpec::new().with_attr("href", "/blog/hello-world"),
    );

    let sink = Arc::new(MemorySink::new());
    let finder = FluentFinder::new(Arc::clone(&driver) as Arc<dyn Driver>, Timeouts::new());
    let actions = Actions::new(Arc::new(finder), Duration::from_secs(10))
        .with_sink(Arc::clone(&sink) as Arc<dyn EventSink>);

    // A static locator and a parameterized one.
    let blog_button = Locator::xpath("//a[@href=\"/blog\"]");
    let post_link =
        Locator::xpath("//section[@class='{css_class}' and contains(., '{post_title}')]//a");

    println!("post_link parameters: {:?}", post_link.parameter_names());

    actions.goto("https://example.org").await?;
    actions.click(&blog_button.target()?).await?;

    let target = post_link.resolve(
        &LocatorArgs::new()
            .with("css_class", "blog-post")
            .with("post_title", "Hello, world"),
    )?;
    let href = actions.get_attribute(&target, "href").await?;
    println!("post href: {href:?}");

    // Forgetting an argument reports every missing name.
    match post_link.resolve(&LocatorArgs::new()) {
        Err(err) => println!("expected failure: {err}"),
        Ok(_) => unreachable!(),
    }

    println!("recorded actions: {:?}", sink.action_names());
    Ok(())
}
