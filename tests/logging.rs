//! Tests for log output when error data cannot be attached.

mod common;

use common::{FailingAllocator, FakeEndpoint, eagain_text};
use log::Level;
use logtest::Logger;
use rdm_errdata::{ErrorDataBuilder, ProviderErrno};

#[test]
fn degraded_completion_logs_warning_with_reason() {
    let mut logger = Logger::start();

    let endpoint = FakeEndpoint::sample();
    let completion = ErrorDataBuilder::new()
        .with_allocator(FailingAllocator)
        .error_completion(&endpoint, &eagain_text, 1, 5, ProviderErrno::new(4001));
    assert!(completion.err_data.is_none());

    let mut found = false;
    while let Some(record) = logger.pop() {
        if record.level() == Level::Warn
            && record.args().contains("without error data")
            && record.args().contains("reason=allocation")
        {
            found = true;
        }
    }
    assert!(found, "warning not logged");
}
