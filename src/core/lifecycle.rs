//! # Lifecycle Manager / 生命周期管理器
//!
//! Invokes class-level and instance-level hooks. Every hook runs behind a
//! panic guard, so a panicking hook reports as an error signal instead of
//! tearing down the run, and [`LifecycleManager::class_scope`] guarantees
//! `after_all` on every exit path.
//!
//! 调用类级和实例级钩子。每个钩子都在 panic 防护下运行，
//! [`LifecycleManager::class_scope`] 保证 `after_all` 在所有退出路径上都会执行。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use crate::core::case::{ClassContext, ClassDriver, ClassPhase, TestContext, TestInstance};
use crate::core::signal::{Signal, TestFlow};

#[derive(Debug, Default, Clone, Copy)]
pub struct LifecycleManager;

impl LifecycleManager {
    pub fn new() -> Self {
        Self
    }

    pub fn before_all(&self, driver: &dyn ClassDriver, class: &mut ClassContext) -> TestFlow {
        debug!(class = class.name(), "running before_all");
        guard(|| driver.before_all(class))
    }

    pub fn after_all(&self, driver: &dyn ClassDriver, class: &mut ClassContext) -> TestFlow {
        debug!(class = class.name(), "running after_all");
        guard(|| driver.after_all(class))
    }

    pub fn before_each(&self, instance: &mut (dyn TestInstance + '_), ctx: &mut TestContext<'_>) -> TestFlow {
        guard(|| instance.before_each(ctx))
    }

    pub fn after_each(&self, instance: &mut (dyn TestInstance + '_), ctx: &mut TestContext<'_>) -> TestFlow {
        guard(|| instance.after_each(ctx))
    }

    /// Runs `before_all`, then `body` with the `before_all` outcome, then
    /// `after_all` whatever happened in between.
    ///
    /// A panic escaping `body` is re-raised once `after_all` has run. An
    /// `after_all` failure is logged and otherwise ignored.
    ///
    /// 依次运行 `before_all`、`body`（传入 `before_all` 的结果）和 `after_all`。
    /// 从 `body` 逃逸的 panic 会在 `after_all` 执行后重新抛出。
    pub fn class_scope<R>(
        &self,
        driver: &dyn ClassDriver,
        class: &mut ClassContext,
        body: impl FnOnce(&mut ClassContext, TestFlow) -> R,
    ) -> R {
        class.set_phase(ClassPhase::Running);
        let setup = self.before_all(driver, class);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut *class, setup)));

        if let Err(signal) = self.after_all(driver, class) {
            warn!(class = class.name(), "afterAll failed: {signal}");
        }
        class.set_phase(ClassPhase::Done);

        match outcome {
            Ok(value) => value,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Runs a hook or body, converting a panic into [`Signal::Error`].
/// 运行钩子或测试主体，将 panic 转换为 [`Signal::Error`]。
pub fn guard(f: impl FnOnce() -> TestFlow) -> TestFlow {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(flow) => flow,
        Err(payload) => Err(Signal::error(anyhow::Error::msg(panic_message(
            payload.as_ref(),
        )))),
    }
}

/// Extracts the message of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
