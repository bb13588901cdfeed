//! Hero carousel runner.

use std::time::Duration;

use tracing::info;
use vitrine_storefront::Storefront;
use vitrine_storefront::carousel;

/// Run the hero for `seconds`, printing each slide as it comes up.
#[allow(clippy::print_stdout)]
pub async fn watch(storefront: &Storefront, seconds: u64, start: Option<usize>) {
    let mut handle = carousel::spawn(storefront.hero());
    let mut updates = handle.subscribe();
    if let Some(index) = start {
        handle.go_to_slide(index);
    }

    let mut shown = None;
    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    loop {
        let index = updates.borrow_and_update().current_index;
        if shown != Some(index) {
            shown = Some(index);
            if let Some(slide) = handle.current_slide() {
                println!("{}  {}", handle.counter_label(), slide.headline);
                println!("         {}", slide.subheadline);
            }
        }

        tokio::select! {
            () = &mut deadline => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    handle.cancel();
    info!(seconds, "Hero stopped");
}
