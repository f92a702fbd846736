use crate::domain::{ClassifiedOption, Decision, ItineraryOption};

// options ranked at or above this cutoff are worth creating
const CREATE_RANK_CUTOFF: usize = 3;

/// Rank a route's options by market share and label each one.
///
/// Options are sorted by market share descending and ranked with the same tie
/// semantics as SQL's RANK(): tied values share a rank, and the next distinct
/// value's rank is its 1-based row position, so a tie group skips the ranks it
/// swallowed. Rank 3 or better is a `Create`, everything below is a `Cancel`.
/// A tie group straddling the cutoff can therefore produce more than three
/// `Create` labels.
///
/// The output is the input relabeled and reordered, nothing else: every field
/// of every option survives unchanged, and tied options keep their incoming
/// relative order.
pub fn classify_options(mut options: Vec<ItineraryOption>) -> Vec<ClassifiedOption> {
    // stable sort, so ties preserve the order the store returned them in
    options.sort_by(|a, b| b.market_share.total_cmp(&a.market_share));

    let mut classified = Vec::with_capacity(options.len());
    let mut rank = 0;
    let mut prev_share: Option<f64> = None;

    for (position, option) in options.into_iter().enumerate() {
        // a strictly lower share opens a new tie group at this row position
        if prev_share.map_or(true, |p| option.market_share < p) {
            rank = position + 1;
        }
        prev_share = Some(option.market_share);

        let decision = if rank <= CREATE_RANK_CUTOFF {
            Decision::Create
        } else {
            Decision::Cancel
        };

        classified.push(ClassifiedOption {
            dep_hour: option.dep_hour,
            arr_hour: option.arr_hour,
            elapsed_time: option.elapsed_time,
            market_share: option.market_share,
            decision,
        });
    }

    classified
}
