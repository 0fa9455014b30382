//! Hardcoded default document.
//!
//! Written to disk whenever the backing file is missing or unreadable, and on
//! `reset`. Seed content mirrors the public site's original sample data.

use std::collections::BTreeMap;

use models::{
    AuthRecord, Document, Domain, FriendlyLink, SiteSettings, SoldDomain,
};

use crate::auth::service::hash_password;

/// Password of the freshly initialized admin account. Only its argon2 hash is
/// ever written to the document.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn default_document() -> Document {
    let now = now_ms();
    Document {
        domains: default_domains(now),
        sold_domains: default_sold_domains(now),
        friendly_links: default_friendly_links(now),
        works: Vec::new(),
        projects: Vec::new(),
        friends: Vec::new(),
        registrar_icons: default_registrar_icons(),
        site_settings: default_site_settings(now),
        auth: default_auth(now),
    }
}

fn default_domains(now: i64) -> Vec<Domain> {
    let mk = |id: &str,
              name: &str,
              extension: &str,
              registrar: &str,
              icon: &str,
              registered: &str,
              expires: &str,
              purchase: &str| Domain {
        id: id.into(),
        name: name.into(),
        extension: extension.into(),
        status: "available".into(),
        registrar: Some(registrar.into()),
        registrar_icon: Some(icon.into()),
        registration_time: Some(registered.into()),
        expiration_time: Some(expires.into()),
        purchase_url: Some(purchase.into()),
        created_at: now,
        updated_at: now,
    };
    vec![
        mk(
            "1",
            "example",
            ".com",
            "阿里云",
            "aliyun",
            "2023-05-15",
            "2025-05-15",
            "https://wanwang.aliyun.com/domain/searchresult?keyword=example.com",
        ),
        mk(
            "2",
            "mywebsite",
            ".org",
            "腾讯云",
            "tencent",
            "2022-11-20",
            "2024-11-20",
            "https://dnspod.cloud.tencent.com/domain/buy?domain=mywebsite.org",
        ),
        mk(
            "3",
            "coolproject",
            ".io",
            "GoDaddy",
            "godaddy",
            "2024-01-10",
            "2026-01-10",
            "https://www.godaddy.com/domainsearch/find?domainToCheck=coolproject.io",
        ),
        mk(
            "4",
            "portfolio",
            ".dev",
            "Namecheap",
            "namecheap",
            "2023-08-05",
            "2025-08-05",
            "https://www.namecheap.com/domains/registration/results/?domain=portfolio.dev",
        ),
        mk(
            "5",
            "business",
            ".co",
            "华为云",
            "huawei",
            "2024-03-22",
            "2026-03-22",
            "https://www.huaweicloud.com/product/domain.html",
        ),
    ]
}

fn default_sold_domains(now: i64) -> Vec<SoldDomain> {
    let mk = |id: &str, name: &str, extension: &str, sold_to: &str, sold_date: &str| SoldDomain {
        id: id.into(),
        name: name.into(),
        extension: extension.into(),
        status: "sold".into(),
        sold_to: Some(sold_to.into()),
        sold_date: Some(sold_date.into()),
        created_at: now,
        updated_at: now,
    };
    vec![
        mk("s1", "premium", ".com", "科技解决方案公司", "2025-02-15"),
        mk("s2", "digital", ".io", "创意代理公司", "2025-01-20"),
        mk("s3", "ecommerce", ".store", "在线零售有限公司", "2024-12-10"),
    ]
}

fn default_friendly_links(now: i64) -> Vec<FriendlyLink> {
    let mk = |id: &str, name: &str, url: &str, description: &str| FriendlyLink {
        id: id.into(),
        name: name.into(),
        url: url.into(),
        description: Some(description.into()),
        created_at: now,
        updated_at: now,
    };
    vec![
        mk("1", "域名注册服务", "https://example.com/register", "提供专业的域名注册和管理服务"),
        mk("2", "网站建设平台", "https://example.com/website-builder", "快速搭建专业网站的一站式平台"),
        mk("3", "域名行情分析", "https://example.com/domain-market", "最新域名市场趋势和价值分析"),
        mk("4", "云服务提供商", "https://example.com/cloud", "高性能云服务器和存储解决方案"),
        mk("5", "域名投资指南", "https://example.com/investment", "专业的域名投资策略和建议"),
    ]
}

fn default_registrar_icons() -> BTreeMap<String, String> {
    let mut icons = BTreeMap::new();
    icons.insert(
        "aliyun".into(),
        r##"<svg viewBox="0 0 1024 1024" width="24" height="24" xmlns="http://www.w3.org/2000/svg"><path d="M362.752 476.864h298.496v67.328H362.752z" fill="#FF8F00"/><path d="M810.816 232.64H613.312l47.68 67.456 144 44.16a62.272 62.272 0 0 1 43.456 59.776V619.968a62.272 62.272 0 0 1-43.52 59.84l-144 44.096-47.616 67.456h197.504A149.184 149.184 0 0 0 960 642.176V381.824a149.184 149.184 0 0 0-149.184-149.12z" fill="#FF8F00"/></svg>"##.into(),
    );
    icons.insert(
        "tencent".into(),
        r##"<svg viewBox="0 0 1024 1024" width="24" height="24" xmlns="http://www.w3.org/2000/svg"><path d="M465.46 165.89a349.18 349.18 0 0 0-126.98 46.59c-112.9 66.9-158.05 193.48-101.5 301.02 43.8 83.3 142.5 131.5 244.9 119.6 99.9-11.6 180.2-81.9 196.9-172.4 18.1-98.2-42.9-196.5-141.9-228.6a266.6 266.6 0 0 0-71.42-66.21z" fill="#3E4055"/></svg>"##.into(),
    );
    icons.insert(
        "godaddy".into(),
        r##"<svg viewBox="0 0 1024 1024" width="24" height="24" xmlns="http://www.w3.org/2000/svg"><path d="M683.52 924.16c69.43-32.92 165.79-91.55 245.76-194.56 20.28-26.11 37.17-52.02 51.2-76.8 12.7-31.49 27.8-76.85 35.84-133.12 18.28-127.54-12.39-222.31-20.48-245.76-12.9-37.38-29.85-80.9-71.68-122.88-65.43-65.74-145.25-78.49-168.96-81.92z" fill="#13EAE4"/></svg>"##.into(),
    );
    icons.insert(
        "namecheap".into(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 2 L2 7 L12 12 L22 7 Z"/><path d="M2 17 L12 22 L22 17"/><path d="M2 12 L12 17 L22 12"/></svg>"#.into(),
    );
    icons.insert(
        "huawei".into(),
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="#c7000b" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="2" y="2" width="20" height="8" rx="2" ry="2"/><rect x="2" y="14" width="20" height="8" rx="2" ry="2"/><line x1="6" y1="6" x2="6.01" y2="6"/><line x1="6" y1="18" x2="6.01" y2="18"/></svg>"##.into(),
    );
    icons
}

fn default_site_settings(now: i64) -> SiteSettings {
    SiteSettings {
        id: "default".into(),
        site_name: "域名展示".into(),
        logo_type: "text".into(),
        logo_text: Some("域名展示".into()),
        logo_image: None,
        favicon: "https://example.com/img/favicon.ico".into(),
        title: "域名展示".into(),
        description: "我的作品和项目展示".into(),
        footer: "© 2023 域名展示".into(),
        theme: "system".into(),
        social: BTreeMap::new(),
        created_at: now,
        updated_at: now,
    }
}

fn default_auth(now: i64) -> AuthRecord {
    AuthRecord {
        id: "admin".into(),
        password_hash: hash_password(DEFAULT_ADMIN_PASSWORD).expect("hash default credential"),
        algorithm: "argon2".into(),
        created_at: now,
        updated_at: now,
    }
}
