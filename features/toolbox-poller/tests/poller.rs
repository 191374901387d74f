use std::{sync::Arc, time::Duration};

use futures::StreamExt;
use tokio::time::{sleep, timeout};
use toolbox_di::{Inject, Provider, TypeRegistry};
use toolbox_poller::{IntervalPoller, Poller, PollerConfig, Tick};

fn drain(subscription: &mut toolbox_poller::Subscription) -> usize {
    let mut count = 0;
    while subscription.try_recv().is_some() {
        count += 1;
    }
    count
}

#[tokio::test(start_paused = true)]
async fn fires_immediately_when_configured() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);
    let mut ticks = poller.subscribe();

    poller.start();

    assert_eq!(ticks.try_recv(), Some(Tick));
    // Nothing else until the timer fires
    assert!(timeout(Duration::from_millis(50), ticks.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn does_not_fire_immediately_when_not_configured() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();

    assert!(timeout(Duration::from_millis(500), ticks.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn fires_after_interval() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();

    let tick = timeout(Duration::from_millis(1500), ticks.recv()).await;
    assert_eq!(tick, Ok(Some(Tick)));
}

#[tokio::test(start_paused = true)]
async fn fires_once_per_interval() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();
    sleep(Duration::from_millis(3500)).await;

    assert_eq!(drain(&mut ticks), 3);
}

#[tokio::test(start_paused = true)]
async fn stop_silences_the_poller() {
    let poller = IntervalPoller::new(Duration::from_millis(200), true);
    let mut ticks = poller.subscribe();

    poller.start();
    assert_eq!(ticks.try_recv(), Some(Tick));
    poller.stop();

    assert!(!poller.is_running());
    sleep(Duration::from_secs(2)).await;
    assert_eq!(ticks.try_recv(), None);
}

#[tokio::test(start_paused = true)]
async fn stop_after_timed_tick_silences_the_poller() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();
    assert_eq!(ticks.recv().await, Some(Tick));
    poller.stop();

    sleep(Duration::from_secs(5)).await;
    assert_eq!(drain(&mut ticks), 0);
}

#[tokio::test(start_paused = true)]
async fn start_while_running_replaces_the_timer() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();
    sleep(Duration::from_millis(500)).await;
    poller.start();
    assert!(poller.is_running());

    // The first timer would have fired at 1s
    sleep(Duration::from_millis(700)).await;
    assert_eq!(drain(&mut ticks), 0);

    // The replacement fires at 1.5s, exactly once
    sleep(Duration::from_millis(400)).await;
    assert_eq!(drain(&mut ticks), 1);
}

#[tokio::test(start_paused = true)]
async fn every_subscriber_receives_every_tick() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);
    let mut first = poller.subscribe();
    let mut second = poller.subscribe();
    assert_eq!(poller.subscriber_count(), 2);

    poller.start();
    sleep(Duration::from_millis(1100)).await;

    assert_eq!(drain(&mut first), 2);
    assert_eq!(drain(&mut second), 2);
}

#[tokio::test(start_paused = true)]
async fn late_subscribers_do_not_see_past_ticks() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);

    poller.start();
    let mut late = poller.subscribe();

    assert_eq!(late.try_recv(), None);
}

#[tokio::test(start_paused = true)]
async fn subscriptions_survive_a_restart() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);
    let mut ticks = poller.subscribe();

    poller.start();
    poller.stop();
    poller.start();

    assert_eq!(drain(&mut ticks), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_poller_ends_subscriptions() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();
    poller.start();

    drop(poller);

    assert_eq!(ticks.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn subscription_as_stream() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);
    let stream = poller.subscribe().into_stream();

    poller.start();

    let ticks: Vec<Tick> = timeout(Duration::from_millis(2500), stream.take(3).collect::<Vec<_>>())
        .await
        .expect("three ticks within 2.5s");
    assert_eq!(ticks, vec![Tick, Tick, Tick]);
}

#[tokio::test(start_paused = true)]
async fn poller_is_wired_through_the_registry() {
    let registry = TypeRegistry::new();
    let config: PollerConfig =
        serde_json::from_str(r#"{ "interval_secs": 1, "fire_immediately": true }"#).unwrap();
    let _config = Provider::in_registry(&registry, Arc::new(config));

    let config = Inject::<PollerConfig>::from_registry(&registry);
    let poller = IntervalPoller::from_config(&config).unwrap();
    let _poller = Provider::<dyn Poller>::in_registry(&registry, Arc::new(poller));

    let poller = Inject::<dyn Poller>::from_registry(&registry);
    let mut ticks = poller.subscribe();
    poller.start();

    assert_eq!(ticks.try_recv(), Some(Tick));
    poller.stop();
    assert!(!poller.is_running());
}

#[tokio::test(start_paused = true)]
async fn slow_subscriber_receives_every_tick() {
    let poller = IntervalPoller::new(Duration::from_secs(1), false);
    let mut ticks = poller.subscribe();

    poller.start();
    sleep(Duration::from_millis(20_500)).await;

    assert_eq!(ticks.pending(), 20);
    assert_eq!(drain(&mut ticks), 20);
}

#[tokio::test(start_paused = true)]
async fn ticks_queued_before_stop_are_still_delivered() {
    let poller = IntervalPoller::new(Duration::from_secs(1), true);
    let mut ticks = poller.subscribe();

    poller.start();
    sleep(Duration::from_millis(1500)).await;
    poller.stop();
    sleep(Duration::from_secs(3)).await;

    // The immediate tick and the one at 1s, nothing after the stop
    assert_eq!(drain(&mut ticks), 2);
}

#[test]
fn runs_on_a_given_runtime_when_started_outside_of_it() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let poller =
        IntervalPoller::new(Duration::from_millis(50), false).with_runtime(runtime.handle().clone());
    let mut ticks = poller.subscribe();

    poller.start();
    assert!(poller.is_running());

    let tick = runtime.block_on(async { timeout(Duration::from_secs(1), ticks.recv()).await });
    assert_eq!(tick, Ok(Some(Tick)));

    poller.stop();
}
