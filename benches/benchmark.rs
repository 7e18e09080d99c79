use checkrail::{record, validate, Record};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn signup_record(id: u64) -> Record {
    record! {
        "username" => format!("user_{id}"),
        "email" => format!("user{id}@company.com"),
        "password" => "S3cret!password",
        "phone" => "07911123456",
        "website" => "https://example.com/profile",
        "role" => "user",
        "dob" => "04-12-1990",
        "admin" => false,
    }
}

fn run_chain(record: Record) -> bool {
    validate(record)
        .required_field("username", None)
        .min_length("username", 3, None)
        .no_spaces("username", None)
        .valid_email(None, None)
        .is_password("password", 8, true, true, true, None)
        .is_phone_number("phone", 11, None)
        .is_url("website", None)
        .is_enum("role", &["user", "admin"], None)
        .is_date_format("dob", None)
        .is_boolean("admin", None)
        .check()
        .valid
}

fn bench_valid_chain(c: &mut Criterion) {
    c.bench_function("valid_signup_chain", |b| {
        b.iter(|| run_chain(black_box(signup_record(7))))
    });
}

fn bench_failing_chain(c: &mut Criterion) {
    let failing = || {
        record! {
            "username" => "a b",
            "email" => "nope",
            "password" => "abc",
            "phone" => "12345",
            "role" => "root",
        }
    };
    c.bench_function("failing_signup_chain", |b| {
        b.iter(|| run_chain(black_box(failing())))
    });
}

fn bench_record_construction(c: &mut Criterion) {
    c.bench_function("record_macro", |b| {
        b.iter(|| black_box(signup_record(black_box(7))))
    });
}

criterion_group!(
    benches,
    bench_valid_chain,
    bench_failing_chain,
    bench_record_construction
);
criterion_main!(benches);
