use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use expression_calculator::interpreter::evaluate_expression;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "10 + 2 * 6",
        "100 * (2 + 12) / 14",
        "(2+3)*4 - 10/5",
        "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3",
        "((1.5 + 2.25) * (3 - 4.125)) ^ (5 / 6) + 7 * (8 - (9 / (10 + 11)))",
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate_expression(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
