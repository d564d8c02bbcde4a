use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use hours_engine::{find_next_open_time, get_open_status, parse_time_range};
use std::hint::black_box;

const WEEK: [&str; 7] = [
    "Monday: 11:00 AM – 3:00 PM, 5:00 – 10:00 PM",
    "Tuesday: 11:00 AM – 3:00 PM, 5:00 – 10:00 PM",
    "Wednesday: Closed",
    "Thursday: 11:00 AM – 3:00 PM, 5:00 – 10:00 PM",
    "Friday: 11:00 AM – 3:00 PM, 5:00 PM – 1:00 AM",
    "Saturday: Open 24 hours",
    "Sunday: 10:00 AM – 9:00 PM",
];

fn bench_status(c: &mut Criterion) {
    let tuesday_afternoon = NaiveDate::from_ymd_opt(2026, 10, 20)
        .unwrap()
        .and_hms_opt(16, 0, 0)
        .unwrap();
    let tuesday_night = NaiveDate::from_ymd_opt(2026, 10, 20)
        .unwrap()
        .and_hms_opt(23, 30, 0)
        .unwrap();

    c.bench_function("parse_time_range/split_shift", |b| {
        b.iter(|| parse_time_range(black_box("11:00 AM – 3:00 PM, 5:00 – 10:00 PM")))
    });
    c.bench_function("get_open_status/closed_between_shifts", |b| {
        b.iter(|| get_open_status(black_box(&WEEK), black_box(tuesday_afternoon)))
    });
    c.bench_function("find_next_open_time/skip_closed_day", |b| {
        b.iter(|| find_next_open_time(black_box(&WEEK), black_box(tuesday_night)))
    });
}

criterion_group!(benches, bench_status);
criterion_main!(benches);
