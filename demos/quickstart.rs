use chrono::{TimeZone, Utc};
use tempslot::{intervals_for_each_day_in_range, split_into_fixed_intervals, subtract_blocked, UtcPeriod};

fn main() -> Result<(), tempslot::RangeError> {
    let at = |d, h, m| Utc.with_ymd_and_hms(2018, 4, d, h, m, 0).unwrap();

    let opening_hours = [
        UtcPeriod::new(at(10, 9, 0), at(10, 17, 0)),
        UtcPeriod::new(at(11, 9, 0), at(11, 13, 0)),
        UtcPeriod::new(at(11, 20, 0), at(12, 2, 0)),
    ];
    let meetings = [
        UtcPeriod::new(at(10, 11, 0), at(10, 12, 30)),
        UtcPeriod::new(at(11, 8, 0), at(11, 10, 0)),
    ];

    let free = subtract_blocked(&opening_hours, &meetings);
    let days = intervals_for_each_day_in_range(&free, at(10, 0, 0), at(12, 0, 0))?;

    for day in &days {
        println!("day {} ({}):", day.index_since_first, day.date.date_naive());
        for slot in split_into_fixed_intervals(&day.ordered_disjoint_intervals, 60) {
            println!("  {slot}");
        }
    }
    Ok(())
}
