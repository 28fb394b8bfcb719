//! 권한 평가기
//!
//! 주체, 카드 상품, 접근 종류로 허용 여부를 결정합니다.

use crate::auth::Identity;
use crate::card::CardProduct;
use crate::error::{Error, Result};

/// 접근 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 조회
    Read,

    /// 생성
    Write,
}

/// 접근 판정
///
/// `identity`가 `None`이면 게이트가 주체 없이 통과시킨 요청(인증 비활성화 모드)이므로 허용합니다.
pub fn authorize(identity: Option<&Identity>, product: CardProduct, access: Access) -> Result<()> {
    let Some(identity) = identity else {
        return Ok(());
    };

    if identity.role.permits(product) {
        return Ok(());
    }

    tracing::debug!(
        user_id = %identity.user_id,
        role = %identity.role,
        product = %product,
        ?access,
        "cross-category access denied"
    );

    match access {
        Access::Read => Err(Error::CategoryNotFound {
            role: identity.role,
            product,
        }),
        Access::Write => Err(Error::ForbiddenCategory {
            role: identity.role,
            product,
        }),
    }
}
