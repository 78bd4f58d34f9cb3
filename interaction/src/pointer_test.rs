#![allow(clippy::float_cmp)]

use super::*;

fn requested(commands: &[Command]) -> TimerToken {
    commands
        .iter()
        .find_map(|c| match c {
            Command::RequestFrame(token) => Some(*token),
            _ => None,
        })
        .expect("sample should request a frame")
}

#[test]
fn latest_defaults_to_origin() {
    let sampler = PointerSampler::new();
    assert_eq!(sampler.latest(), PointerPosition::default());
    assert_eq!(sampler.latest(), PointerPosition::new(0.0, 0.0));
}

#[test]
fn first_sample_requests_frame_without_cancel() {
    let mut sampler = PointerSampler::new();
    let out = sampler.sample(PointerPosition::new(10.0, 20.0));
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], Command::RequestFrame(_)));
}

#[test]
fn sample_is_not_committed_before_frame() {
    let mut sampler = PointerSampler::new();
    sampler.sample(PointerPosition::new(10.0, 20.0));
    assert_eq!(sampler.latest(), PointerPosition::default());
}

#[test]
fn frame_commits_pending_sample() {
    let mut sampler = PointerSampler::new();
    let token = requested(&sampler.sample(PointerPosition::new(10.0, 20.0)));
    assert_eq!(sampler.frame_elapsed(token), Some(PointerPosition::new(10.0, 20.0)));
    assert_eq!(sampler.latest(), PointerPosition::new(10.0, 20.0));
    assert!(sampler.pending_frame().is_none());
}

#[test]
fn burst_within_one_frame_yields_single_update_with_last_coordinates() {
    let mut sampler = PointerSampler::new();
    let mut tokens = Vec::new();
    for i in 0..10 {
        let v = f64::from(i);
        tokens.push(requested(&sampler.sample(PointerPosition::new(v, v * 2.0))));
    }

    let updates: Vec<_> = tokens.iter().filter_map(|t| sampler.frame_elapsed(*t)).collect();
    assert_eq!(updates, vec![PointerPosition::new(9.0, 18.0)]);
}

#[test]
fn resample_cancels_previous_frame() {
    let mut sampler = PointerSampler::new();
    let first = requested(&sampler.sample(PointerPosition::new(1.0, 1.0)));
    let out = sampler.sample(PointerPosition::new(2.0, 2.0));
    assert_eq!(out[0], Command::CancelFrame(first));
    assert!(sampler.frame_elapsed(first).is_none());
}

#[test]
fn cancel_drops_pending_sample() {
    let mut sampler = PointerSampler::new();
    let token = requested(&sampler.sample(PointerPosition::new(5.0, 5.0)));
    assert_eq!(sampler.cancel(), vec![Command::CancelFrame(token)]);
    assert!(sampler.frame_elapsed(token).is_none());
    assert_eq!(sampler.latest(), PointerPosition::default());
    assert!(sampler.cancel().is_empty());
}
