use regex::Regex;
use std::sync::OnceLock;

use super::request::Secret;
use crate::error::InputError;

/// WordPress 文章类型（REST 路由中的 rest_base）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostType {
    Posts,
    Pages,
    /// 自定义文章类型
    Custom(String),
}

fn rest_base_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_-]+$").expect("静态正则表达式"))
}

impl PostType {
    /// 界面上可选的类型名称
    pub const CHOICES: [&'static str; 3] = ["posts", "pages", "custom"];

    /// 创建自定义文章类型，校验 rest_base 格式
    pub fn custom(rest_base: &str) -> Result<Self, InputError> {
        let rest_base = rest_base.trim().trim_matches('/');
        if rest_base_pattern().is_match(rest_base) {
            Ok(PostType::Custom(rest_base.to_string()))
        } else {
            Err(InputError::InvalidPostType(rest_base.to_string()))
        }
    }

    pub fn rest_base(&self) -> &str {
        match self {
            PostType::Posts => "posts",
            PostType::Pages => "pages",
            PostType::Custom(base) => base,
        }
    }
}

/// 发布目标（仅在本次会话中保存）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub site_url: String,
    pub username: String,
    pub password: Secret,
    pub post_type: PostType,
}

impl PublishTarget {
    /// 创建发布目标，任一字段为空时返回错误
    pub fn new(
        site_url: &str,
        username: &str,
        password: Secret,
        post_type: PostType,
    ) -> Result<Self, InputError> {
        let site_url = site_url.trim().trim_end_matches('/');
        let username = username.trim();
        if site_url.is_empty() || username.is_empty() || password.is_empty() {
            return Err(InputError::MissingPublishTarget);
        }
        Ok(Self {
            site_url: site_url.to_string(),
            username: username.to_string(),
            password,
            post_type,
        })
    }

    /// 连接检查使用的端点（固定为 posts）
    pub fn probe_endpoint(&self) -> String {
        format!("{}/wp-json/wp/v2/posts", self.site_url)
    }

    /// 发布使用的端点
    pub fn publish_endpoint(&self) -> String {
        format!("{}/wp-json/wp/v2/{}", self.site_url, self.post_type.rest_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(site: &str, post_type: PostType) -> PublishTarget {
        PublishTarget::new(site, "editor", Secret::new("abcd efgh"), post_type).unwrap()
    }

    #[test]
    fn test_endpoints_strip_trailing_slash() {
        let t = target("https://example.com/", PostType::Pages);
        assert_eq!(t.probe_endpoint(), "https://example.com/wp-json/wp/v2/posts");
        assert_eq!(t.publish_endpoint(), "https://example.com/wp-json/wp/v2/pages");
    }

    #[test]
    fn test_custom_post_type_validation() {
        let custom = PostType::custom("/faq/").unwrap();
        assert_eq!(custom.rest_base(), "faq");
        assert_eq!(
            target("https://example.com", custom).publish_endpoint(),
            "https://example.com/wp-json/wp/v2/faq"
        );
        assert!(PostType::custom("faq?x=1").is_err());
        assert!(PostType::custom("").is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = PublishTarget::new("https://example.com", " ", Secret::new("pw"), PostType::Posts);
        assert_eq!(err.unwrap_err(), InputError::MissingPublishTarget);

        let err = PublishTarget::new("https://example.com", "u", Secret::new(""), PostType::Posts);
        assert_eq!(err.unwrap_err(), InputError::MissingPublishTarget);
    }
}
