use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::AuthenticatorMetadata;

/// DNS-01 验证器 Trait
///
/// The capability an ACME client needs from a DNS plugin: put the challenge
/// TXT record in place, and take it away again once the challenge is done.
#[async_trait]
pub trait Authenticator: Send + Sync + Debug {
    /// 验证器标识符
    fn id(&self) -> &'static str;

    /// 获取验证器元数据（类型级别）
    ///
    /// 此方法不需要实例，可以在创建验证器之前调用。
    fn metadata() -> AuthenticatorMetadata
    where
        Self: Sized;

    /// Present the challenge record `validation_name` with content `validation`
    /// for `domain`.
    ///
    /// A failure here should abort the certificate request.
    async fn perform(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()>;

    /// Remove the challenge record created by [`perform`](Self::perform).
    ///
    /// Failures are reported, but a dangling validation record is harmless,
    /// so hosts usually log them and carry on.
    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()>;
}
