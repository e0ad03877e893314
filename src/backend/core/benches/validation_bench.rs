//! Role validation benchmarks. Run with: cargo bench --bench validation_bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use esrest_core::config::ValidationConfig;
use esrest_core::security::{BuiltinRole, ClusterPrivilege, IndexPrivilege, IndexPrivilegeGroup, Role};
use esrest_core::validation::{validate_field, IndexPattern, PrivilegeName, Required, RoleValidator, Validate};
fn group(i: usize) -> IndexPrivilegeGroup { IndexPrivilegeGroup::new().with_index([format!("logs-{}-*", i), format!("metrics-{}", i)]).with_privilege(["read", "view_index_metadata"]).with_field(["@timestamp", "message"]) }
fn valid_role(groups: usize) -> Role { Role::named("analyst").with_cluster_privilege(["monitor"]).with_index_privilege_group((0..groups).map(group).collect()).with_run_as(["reporting"]) }
fn invalid_role() -> Role { Role::new().with_cluster_privilege(["monitor", "manage_securty", "monitor"]).with_index_privilege_group(vec![IndexPrivilegeGroup::new().with_index(["Logs", "_internal"]).with_privilege(["reed"]), IndexPrivilegeGroup::new()]).with_run_as([""]) }
fn bench_individual_rules(c: &mut Criterion) {
    let mut g = c.benchmark_group("validation_individual_rules"); g.measurement_time(Duration::from_secs(5));
    g.bench_function("required_pass", |b| { let v = "read_only".to_string(); b.iter(|| { black_box(validate_field("name", &v).rule(Required).result()); }); });
    g.bench_function("cluster_privilege_pass", |b| { let v = "manage_security".to_string(); b.iter(|| { black_box(validate_field("cluster[0]", &v).rule(PrivilegeName::<ClusterPrivilege>::new()).result()); }); });
    g.bench_function("cluster_privilege_fail", |b| { let v = "manage_securty".to_string(); b.iter(|| { black_box(validate_field("cluster[0]", &v).rule(PrivilegeName::<ClusterPrivilege>::new()).result()); }); });
    g.bench_function("index_privilege_pass", |b| { let v = "create_index".to_string(); b.iter(|| { black_box(validate_field("privileges[0]", &v).rule(PrivilegeName::<IndexPrivilege>::new()).result()); }); });
    g.bench_function("index_pattern_pass", |b| { let v = "logstash-2016.01.*".to_string(); b.iter(|| { black_box(validate_field("names[0]", &v).rule(IndexPattern::default()).result()); }); });
    g.bench_function("index_pattern_fail", |b| { let v = "Logstash,metrics".to_string(); b.iter(|| { black_box(validate_field("names[0]", &v).rule(IndexPattern::default()).result()); }); });
    g.bench_function("typed_view", |b| { let r = valid_role(1); b.iter(|| black_box(r.cluster_privileges())); });
    g.finish();
}
fn bench_role_validation(c: &mut Criterion) {
    let mut g = c.benchmark_group("validation_role"); g.measurement_time(Duration::from_secs(5));
    g.bench_function("valid_role", |b| { let r = valid_role(2); b.iter(|| black_box(r.validate())); });
    g.bench_function("invalid_role", |b| { let r = invalid_role(); b.iter(|| black_box(r.validate())); });
    g.bench_function("lenient_invalid_role", |b| { let v = RoleValidator::new(ValidationConfig { strict_privileges: false, reject_duplicates: false, ..ValidationConfig::default() }); let r = invalid_role(); b.iter(|| black_box(v.validate_role(&r))); });
    g.bench_function("builtin_roles", |b| { let roles = BuiltinRole::all_roles(); let v = RoleValidator::default(); b.iter(|| black_box(v.validate_role_set(&roles))); });
    g.finish();
}
fn bench_group_scaling(c: &mut Criterion) {
    let mut g = c.benchmark_group("validation_group_scaling"); g.measurement_time(Duration::from_secs(8));
    for &n in &[1usize, 10, 100] {
        g.throughput(Throughput::Elements(n as u64));
        g.bench_with_input(BenchmarkId::new("groups", n), &n, |b, &n| { let r = valid_role(n); b.iter(|| black_box(r.validate())); });
    }
    g.finish();
}
criterion_group!(benches, bench_individual_rules, bench_role_validation, bench_group_scaling);
criterion_main!(benches);
