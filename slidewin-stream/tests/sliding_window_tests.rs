// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, FusedStream};
use futures::StreamExt;
use slidewin_core::WindowPhase;
use slidewin_stream::{sliding_window_stream, IntoWindowedStream, SlidingWindowStreamExt};
use slidewin_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, unwrap_stream, unwrap_value,
    CountingIter, DropProbe,
};

#[tokio::test]
async fn test_sliding_window_emits_once_full_then_every_item() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.sliding_window(3)?;

    // Act & Assert
    tx.send(1)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(2)?;
    assert_no_element_emitted(&mut result, 100).await;

    tx.send(3)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![1, 2, 3]
    );

    tx.send(4)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![2, 3, 4]
    );

    tx.send(5)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![3, 4, 5]
    );

    drop(tx);
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_partial_on_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.sliding_window(5)?;

    // Act
    tx.send(1)?;
    tx.send(2)?;
    tx.send(3)?;
    assert_no_element_emitted(&mut result, 100).await;
    drop(tx);

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![1, 2, 3]
    );
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_empty_source_emits_empty_window() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.sliding_window(3)?;

    // Act
    drop(tx);

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        Vec::<i32>::new()
    );
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_size_one_mirrors_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<&'static str>();
    let mut result = stream.sliding_window(1)?;

    // Act & Assert
    for word in ["alpha", "beta", "gamma"] {
        tx.send(word)?;
        assert_eq!(
            unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
            vec![word]
        );
    }

    drop(tx);
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_scenarios() -> anyhow::Result<()> {
    let cases: [(Vec<i32>, usize, Vec<Vec<i32>>); 4] = [
        (
            vec![1, 2, 3, 4, 5],
            2,
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]],
        ),
        (vec![1, 2, 3], 5, vec![vec![1, 2, 3]]),
        (vec![], 3, vec![vec![]]),
        (vec![1, 2, 3, 4], 1, vec![vec![1], vec![2], vec![3], vec![4]]),
    ];

    for (source, size, expected) in cases {
        // Arrange
        let result = stream::iter(source).into_windowed_stream().sliding_window(size)?;

        // Act
        let windows: Vec<Vec<i32>> = result.map(|item| item.unwrap()).collect().await;

        // Assert
        assert_eq!(windows, expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_count_and_positions() -> anyhow::Result<()> {
    for n in 0..10usize {
        for w in 1..6usize {
            // Arrange
            let source: Vec<usize> = (0..n).collect();
            let result = stream::iter(source.clone())
                .into_windowed_stream()
                .sliding_window(w)?;

            // Act
            let windows: Vec<Vec<usize>> = result.map(|item| item.unwrap()).collect().await;

            // Assert
            assert_eq!(windows.len(), if n >= w { n - w + 1 } else { 1 });
            for (i, window) in windows.iter().enumerate() {
                for (k, value) in window.iter().enumerate() {
                    assert_eq!(*value, source[i + k]);
                }
            }
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_windows_are_independent() -> anyhow::Result<()> {
    // Arrange
    let mut result = stream::iter(vec![1, 2, 3, 4])
        .into_windowed_stream()
        .sliding_window(3)?;

    // Act
    let mut first = unwrap_value(result.next().await);
    first.clear();
    first.push(42);

    // Assert
    assert_eq!(unwrap_value(result.next().await), vec![2, 3, 4]);
    assert_eq!(first, vec![42]);

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_pulls_lazily() -> anyhow::Result<()> {
    for w in 1..5usize {
        for m in 1..8usize {
            // Arrange
            let (source, pulls) = CountingIter::new(0u32..);
            let result = stream::iter(source).into_windowed_stream().sliding_window(w)?;
            assert_eq!(pulls.get(), 0);

            // Act
            let windows: Vec<_> = result.take(m).collect().await;

            // Assert
            assert_eq!(windows.len(), m);
            assert!(pulls.get() <= m + w - 1, "w={w} m={m} pulls={}", pulls.get());
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_releases_source_on_completion() -> anyhow::Result<()> {
    // Arrange
    let (source, released) = DropProbe::new(stream::iter(vec![1, 2]).into_windowed_stream());
    let mut result = source.sliding_window(2)?;

    // Act
    assert_eq!(unwrap_value(result.next().await), vec![1, 2]);
    assert!(!released.is_released());
    assert!(result.next().await.is_none());

    // Assert
    assert!(released.is_released());
    assert!(result.is_terminated());
    assert!(!result.holds_source());
    assert_eq!(result.phase(), WindowPhase::Exhausted);
    assert!(result.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_releases_source_when_dropped() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = stream.sliding_window(2)?;

    tx.send(1)?;
    tx.send(2)?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![1, 2]
    );
    assert!(!tx.is_closed());

    // Act
    drop(result);

    // Assert
    assert!(tx.is_closed());
    assert!(tx.send(3).is_err());

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_stream_function_validates_arguments() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();

    // Act
    let err = sliding_window_stream(Some(stream), -1).unwrap_err();

    // Assert
    assert!(err.is_invalid_argument());
    assert!(tx.is_closed());

    let (_tx, stream) = test_channel::<i32>();
    let mut result = sliding_window_stream(Some(stream), 2)?;
    assert_no_element_emitted(&mut result, 50).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_zero_size_rejected() -> anyhow::Result<()> {
    // Arrange
    let (_tx, stream) = test_channel::<i32>();

    // Act
    let err = stream.sliding_window(0).unwrap_err();

    // Assert
    assert!(err.is_invalid_argument());

    Ok(())
}
