use cors_gate_rs::constants::method;
use cors_gate_rs::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsOptions,
    ExposedHeaders, OriginPolicy, RequestContext, split_header_list,
};
use criterion::{BenchmarkId, Criterion, SamplingMode, black_box, criterion_group, criterion_main};
use http::Request;
use once_cell::sync::Lazy;

static HEAVY_HEADER_LINE: Lazy<&'static str> = Lazy::new(|| {
    let headers = (0..64)
        .map(|idx| format!("X-Bench-Header-{idx:03}"))
        .collect::<Vec<_>>()
        .join(",");
    Box::leak(headers.into_boxed_str())
});

fn bench_policy() -> OriginPolicy {
    OriginPolicy {
        allowed_origins: AllowedOrigins::list([
            "https://bench.allowed",
            "https://.*\\.bench\\.allowed",
        ])
        .expect("valid benchmark origins"),
        allowed_methods: AllowedMethods::list([method::GET, method::POST, method::PUT]),
        allowed_headers: AllowedHeaders::list(generate_headers(64)),
        exposed_headers: ExposedHeaders::list(["X-Trace-Id", "X-Request-Id"]),
        allow_credentials: true,
        max_age: 600,
    }
}

fn build_cors() -> Cors {
    Cors::new(CorsOptions::default().with_policy("bench", bench_policy()))
        .expect("valid benchmark configuration")
}

/// `size` regex policies ahead of the one that finally matches.
fn build_cors_with_policies(size: usize) -> Cors {
    let options = (0..size).fold(CorsOptions::default(), |options, idx| {
        let policy = OriginPolicy {
            allowed_origins: AllowedOrigins::list([format!("https://svc{idx:03}\\.[a-z]+\\.bench")])
                .expect("valid benchmark regex"),
            ..OriginPolicy::default()
        };
        options.with_policy(format!("svc{idx:03}"), policy)
    });
    Cors::new(options.with_policy("tail", bench_policy())).expect("valid benchmark configuration")
}

fn generate_headers(count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| format!("X-Bench-Header-{idx:03}"))
        .collect()
}

fn preflight_context() -> RequestContext<'static> {
    RequestContext {
        method: method::OPTIONS,
        origin: Some("https://edge.bench.allowed"),
        access_control_request_method: Some(method::PUT),
        access_control_request_headers: Some(split_header_list([*HEAVY_HEADER_LINE])),
    }
}

fn simple_context() -> RequestContext<'static> {
    RequestContext {
        method: method::POST,
        origin: Some("https://bench.allowed"),
        ..RequestContext::default()
    }
}

fn bench_preflight_processing(c: &mut Criterion) {
    let cors = build_cors();
    let mut group = c.benchmark_group("preflight_processing");

    group.bench_function("accept_allowed_preflight", |b| {
        let request = preflight_context();
        b.iter(|| match cors.check(black_box(&request)) {
            CorsDecision::PreflightAccepted { .. } => {}
            other => panic!("unexpected decision: {other:?}"),
        })
    });

    group.bench_function("reject_disallowed_method", |b| {
        let request = RequestContext {
            access_control_request_method: Some(method::DELETE),
            ..preflight_context()
        };
        b.iter(|| match cors.check(black_box(&request)) {
            CorsDecision::PreflightRejected(_) => {}
            other => panic!("unexpected decision: {other:?}"),
        })
    });

    group.finish();
}

fn bench_simple_processing(c: &mut Criterion) {
    let cors = build_cors();
    let mut group = c.benchmark_group("simple_processing");

    group.bench_function("accept_allowed_simple", |b| {
        let request = simple_context();
        b.iter(|| match cors.check(black_box(&request)) {
            CorsDecision::SimpleAccepted { .. } => {}
            other => panic!("unexpected decision: {other:?}"),
        })
    });

    group.bench_function("pass_through_unmatched_origin", |b| {
        let request = RequestContext {
            origin: Some("https://elsewhere.test"),
            ..simple_context()
        };
        b.iter(|| match cors.check(black_box(&request)) {
            CorsDecision::NotApplicable => {}
            other => panic!("unexpected decision: {other:?}"),
        })
    });

    group.finish();
}

fn bench_policy_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_resolution");
    group.sampling_mode(SamplingMode::Flat);

    for &size in &[1_usize, 16, 64, 256] {
        let cors = build_cors_with_policies(size);
        group.bench_with_input(BenchmarkId::new("regex_table", size), &cors, |b, cors| {
            b.iter(|| {
                let resolved = cors.resolve_policy(black_box("https://bench.allowed"));
                assert!(resolved.is_some());
            })
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let cors = build_cors();
    let mut group = c.benchmark_group("filter");

    group.bench_function("http_simple_request", |b| {
        b.iter(|| {
            let request = Request::post("/")
                .header("origin", "https://bench.allowed")
                .body(())
                .expect("valid request");
            let response = cors.filter(request, |_| http::Response::new(String::new()));
            black_box(response)
        })
    });

    group.finish();
}

fn bench_cors(c: &mut Criterion) {
    bench_preflight_processing(c);
    bench_simple_processing(c);
    bench_policy_resolution(c);
    bench_filter(c);
}

criterion_group!(cors_gate_rs_benches, bench_cors);
criterion_main!(cors_gate_rs_benches);
