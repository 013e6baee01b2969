use std::net::SocketAddr;
use std::time::Duration;

use futures::future::join_all;
use tokio::runtime::Runtime;

use stats_service::{Config, Server};

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

fn start_server(runner: &Runtime) -> SocketAddr {
    let config = Config::default().with_addr("127.0.0.1:0".parse().unwrap());
    let server = Server::bind(config).unwrap();
    let addr = server.local_addr().unwrap();
    runner.spawn(server.run());
    addr
}

pub async fn parallel_mean(client: reqwest::Client, addr: SocketAddr, request_count: usize) {
    let requests = (1..=request_count)
        .map(|n| {
            let client = client.clone();
            let url = format!("http://{}/mean?nums={},{},{}", addr, n, n * 2, n * 3);
            tokio::spawn(async move { client.get(&url).send().await.map(|r| r.status()) })
        })
        .collect::<Vec<_>>();

    for result in join_all(requests).await {
        assert!(result.unwrap().unwrap().is_success());
    }
}

fn parallel_requests(c: &mut Criterion) {
    let request_count = 100;
    let runner = Runtime::new().unwrap();
    let addr = start_server(&runner);
    let client = reqwest::Client::new();

    c.bench_with_input(
        BenchmarkId::new("parallel_mean", request_count),
        &request_count,
        |b, &request_count| {
            b.to_async(&runner)
                .iter(|| parallel_mean(client.clone(), addr, request_count));
        },
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10).measurement_time(Duration::from_secs(10));
    targets = parallel_requests
}
criterion_main!(benches);
