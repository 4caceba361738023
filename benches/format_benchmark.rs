use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strava_notify::models::{format_message, Activity, WebhookMessage};

fn benchmark_format_message(c: &mut Criterion) {
    let activity = Activity {
        id: 16804567307,
        name: "Rancho San Antonio loop via Black Mountain".to_string(),
        distance: 24012.7,
        moving_time: 4021,
    };

    let mut group = c.benchmark_group("format_message");

    group.bench_function("text_only", |b| {
        b.iter(|| format_message(black_box(&activity)))
    });

    group.bench_function("webhook_payload_json", |b| {
        b.iter(|| {
            let message = WebhookMessage::from(black_box(&activity));
            serde_json::to_vec(&message)
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_format_message);
criterion_main!(benches);
