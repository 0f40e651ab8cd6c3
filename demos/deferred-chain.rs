use vessel::deferred;
use vessel::prelude::*;

#[tokio::main]
async fn main() {
    let (handle, pending) = deferred::pair::<u32>();

    tokio::spawn(async move {
        handle.complete(21);
    });

    let outcome = Result::<u32, String>::Ok(2)
        .flat_map_async(|factor| async move {
            pending.await.match_with(
                |value| Result::Ok(value * factor),
                || Result::Err(String::from("deferred computation was cancelled")),
            )
        })
        .await;

    outcome.match_with(
        |value| println!("deferred chain produced {}", value),
        |why| println!("deferred chain failed: {}", why),
    );
}
