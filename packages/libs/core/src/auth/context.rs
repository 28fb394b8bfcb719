//! 요청 단위 주체 컨텍스트
//!
//! 인증 게이트가 확정한 주체를 요청 하나가 끝날 때까지 하위 로직에 노출합니다.
//! 값은 요청 future를 감싼 task-local 범위에만 존재하므로, 요청이 성공하든 실패하든
//! (panic 포함) 범위를 벗어나는 순간 사라지고 같은 워커 스레드의 다음 요청으로 새지 않습니다.

use std::future::Future;

use super::identity::Identity;

tokio::task_local! {
    static CURRENT_IDENTITY: Option<Identity>;
}

/// 주체를 설정한 채 future 실행
///
/// `None`은 게이트를 통과했지만 주체가 없는 요청입니다 (로그인 경로, 인증 비활성화 모드).
pub async fn scope<F>(identity: Option<Identity>, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_IDENTITY.scope(identity, fut).await
}

/// 현재 요청의 주체
///
/// 범위 밖이거나 주체가 없는 요청이면 `None`입니다.
pub fn current() -> Option<Identity> {
    CURRENT_IDENTITY.try_with(|identity| identity.clone()).ok().flatten()
}
