use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tally_calculator::built_in::AddOperation;
use tally_calculator::{BUILTIN_OPERATIONS, Calculator, Operation};

fn bench_direct_execute(c: &mut Criterion) {
    c.bench_function("execute_add_direct", |b| {
        b.iter(|| black_box(AddOperation.execute(black_box(10.0), black_box(5.0))));
    });
}

fn bench_named_dispatch(c: &mut Criterion) {
    let calculator = Calculator::with_builtins();

    c.bench_function("calculate_builtins", |b| {
        b.iter(|| {
            for name in BUILTIN_OPERATIONS {
                let _ = black_box(calculator.calculate(name, black_box(30.0), black_box(3.0)));
            }
        });
    });

    c.bench_function("calculate_unknown", |b| {
        b.iter(|| black_box(calculator.calculate(black_box("raiz"), 9.0, 2.0)));
    });
}

criterion_group!(benches, bench_direct_execute, bench_named_dispatch);
criterion_main!(benches);
