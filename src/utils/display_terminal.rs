//! 터미널 출력 포맷팅 유틸리티
//!
//! 기동 과정의 단계 표시와 최종 요약 배너를 만듭니다.
//! 포맷팅은 문자열을 반환하는 함수로 분리해 두고, 출력은 `print_*`가 담당합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 (3줄)
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Credential Gate                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 기동 단계 시작 표시 (`→ Step 1: ...`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 기동 단계 완료 표시 (`✓ Step 1: ...`)
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 들여쓰기된 하위 항목 한 줄
pub fn sub_task_line(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 기동 완료 요약
pub struct StartupSummary<'a> {
    pub environment: &'a str,
    pub bind_address: &'a str,
    pub database: &'a str,
    pub token_ttl_secs: i64,
    pub bcrypt_cost: u32,
}

impl StartupSummary<'_> {
    pub fn render(&self) -> String {
        let lines = [
            boxed_title("🚀 CREDENTIAL GATE READY"),
            sub_task_line("Environment", self.environment),
            sub_task_line("Listening", &format!("http://{}", self.bind_address)),
            sub_task_line("Database", self.database),
            sub_task_line("Token TTL", &format!("{}s", self.token_ttl_secs)),
            sub_task_line("bcrypt cost", &self.bcrypt_cost.to_string()),
        ];
        lines.join("\n")
    }

    pub fn print(&self) {
        println!();
        println!("{}", self.render());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let rendered = boxed_title("Gate");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
        assert!(lines[1].contains("Gate"));
    }

    #[test]
    fn test_summary_lists_settings() {
        let summary = StartupSummary {
            environment: "production",
            bind_address: "0.0.0.0:8080",
            database: "credential_gate",
            token_ttl_secs: 604800,
            bcrypt_cost: 12,
        };
        let rendered = summary.render();

        assert!(rendered.contains("http://0.0.0.0:8080"));
        assert!(rendered.contains("604800s"));
        assert!(rendered.contains("├─ bcrypt cost: 12"));
    }
}
