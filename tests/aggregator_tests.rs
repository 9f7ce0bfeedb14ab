use sweep_plot::aggregator::{
    average_measurements, BucketTransform, BucketedAverager, EmptyBucketPolicy,
};
use sweep_plot::parser::Measurement;
use sweep_plot::utils::config::BUCKET_COUNT;
use sweep_plot::utils::error::AggregateError;

/// Two runs per nominal count, with run time shrinking as the count grows
fn full_sweep(transform: BucketTransform) -> Vec<Measurement> {
    (0..BUCKET_COUNT)
        .flat_map(|index| {
            let label = transform.label(index) as f64;
            [
                Measurement::new(label, 100.0 / label),
                Measurement::new(label, 100.0 / label + 1.0),
            ]
        })
        .collect()
}

#[test]
fn test_full_processor_sweep() {
    let data = full_sweep(BucketTransform::Processors);
    let averages =
        average_measurements(BucketTransform::Processors, &data, EmptyBucketPolicy::Fail).unwrap();

    assert_eq!(averages.len(), BUCKET_COUNT);
    for (i, avg) in averages.iter().enumerate() {
        assert_eq!(avg.index, i);
        assert_eq!(avg.label, 2 * i as u32 + 2);
        assert_eq!(avg.count, 2);
        assert!((avg.average - (100.0 / avg.label as f64 + 0.5)).abs() < 1e-12);
    }
}

#[test]
fn test_label_spacing() {
    for transform in [BucketTransform::Processors, BucketTransform::Threads] {
        let averages =
            average_measurements(transform, &full_sweep(transform), EmptyBucketPolicy::Fail)
                .unwrap();

        for pair in averages.windows(2) {
            assert_eq!(pair[1].label - pair[0].label, transform.step());
        }
    }
}

#[test]
fn test_sum_equals_count_times_average() {
    let data = vec![
        Measurement::new(1.0, 0.1),
        Measurement::new(1.0, 0.2),
        Measurement::new(1.0, 0.4),
        Measurement::new(7.0, 3.0),
    ];
    let averages =
        average_measurements(BucketTransform::Threads, &data, EmptyBucketPolicy::Sentinel).unwrap();

    for avg in averages.iter().filter(|a| !a.is_empty()) {
        assert!((avg.sum - avg.count as f64 * avg.average).abs() < 1e-12);
    }
    assert_eq!(averages.iter().map(|a| a.count).sum::<usize>(), data.len());
}

#[test]
fn test_order_does_not_matter() {
    let mut data = full_sweep(BucketTransform::Threads);
    let forward =
        average_measurements(BucketTransform::Threads, &data, EmptyBucketPolicy::Fail).unwrap();

    data.reverse();
    let backward =
        average_measurements(BucketTransform::Threads, &data, EmptyBucketPolicy::Fail).unwrap();

    for (a, b) in forward.iter().zip(&backward) {
        assert_eq!(a.count, b.count);
        assert!((a.average - b.average).abs() < 1e-12);
    }
}

#[test]
fn test_thread_key_out_of_range() {
    let data = vec![Measurement::new(21.0, 1.0)];
    let err = average_measurements(BucketTransform::Threads, &data, EmptyBucketPolicy::Sentinel)
        .unwrap_err();

    assert_eq!(
        err,
        AggregateError::KeyOutOfRange {
            key: 21.0,
            index: 20,
            bucket_count: BUCKET_COUNT,
        }
    );
}

#[test]
fn test_zero_key_rejected() {
    for transform in [BucketTransform::Processors, BucketTransform::Threads] {
        let mut averager = BucketedAverager::new(transform);
        assert!(averager.push(Measurement::new(0.0, 1.0)).is_err());
        assert!(averager.counts().iter().all(|&c| c == 0));
    }
}

#[test]
fn test_empty_input_under_each_policy() {
    let err = average_measurements(BucketTransform::Threads, &[], EmptyBucketPolicy::Fail)
        .unwrap_err();
    assert_eq!(err, AggregateError::EmptyBucket { index: 0, label: 1 });

    let averages =
        average_measurements(BucketTransform::Threads, &[], EmptyBucketPolicy::Sentinel).unwrap();
    assert!(averages.iter().all(|a| a.average.is_nan()));
}

#[test]
fn test_same_input_same_output() {
    let data = vec![
        Measurement::new(2.0, 10.0),
        Measurement::new(2.0, 20.0),
        Measurement::new(6.0, 1.5),
    ];

    let first =
        average_measurements(BucketTransform::Processors, &data, EmptyBucketPolicy::Sentinel)
            .unwrap();
    let second =
        average_measurements(BucketTransform::Processors, &data, EmptyBucketPolicy::Sentinel)
            .unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!((a.index, a.label, a.count), (b.index, b.label, b.count));
        assert_eq!(a.sum.to_bits(), b.sum.to_bits());
        assert_eq!(a.average.to_bits(), b.average.to_bits());
    }
}

#[test]
fn test_huge_negative_thread_key() {
    let data = vec![Measurement::new(-1e19, 1.0)];
    let err = average_measurements(BucketTransform::Threads, &data, EmptyBucketPolicy::Sentinel)
        .unwrap_err();

    assert_eq!(
        err,
        AggregateError::KeyOutOfRange {
            key: -1e19,
            index: -1,
            bucket_count: BUCKET_COUNT,
        }
    );
}
