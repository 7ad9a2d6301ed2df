// Static marketing content of the landing page

pub const BRAND: &str = "EcoMimic 3.0";
pub const TAGLINE: &str = "多模态仿生式智能水族箱";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub const NAV: [NavLink; 5] = [
    NavLink { anchor: "features", label: "功能" },
    NavLink { anchor: "models", label: "款式" },
    NavLink { anchor: "console", label: "控制台" },
    NavLink { anchor: "specs", label: "规格" },
    NavLink { anchor: "faq", label: "FAQ" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub lead: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "游动即产氧，",
    highlight: "零门槛的智能水族",
    lead: "集 AI 视觉、IoT 与“仿生血液”产氧于一体：自主巡航清洁，精准水质调控，AR 第一视角交互，元宇宙虚实同步。",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: Option<&'static str>,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { label: "AI算力", value: "6 TOPS", sub: Some("RK3588S NPU") },
    Stat { label: "仿生关节", value: "5 段", sub: Some("亚鲹式推进") },
    Stat { label: "无人化运维", value: "7×24h", sub: Some("自动巡航/回充") },
];

pub const HERO_POINTS: [&str; 5] = [
    "“仿生血液”电化学产氧，静音高效",
    "AI 健康监测与异常预警",
    "低电量自动返航无线充电",
    "手势/APP 多模态交互",
    "数字孪生 & 元宇宙同步",
];

/// Card with a title and one paragraph of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 9] = [
    Feature {
        title: "游动即产氧",
        body: "基于碘化锌液流电池的“仿生血液”，边游动边产氧，微气泡快速溶解，维持理想溶氧。",
    },
    Feature {
        title: "AI 生态管理",
        body: "多传感融合 + 视觉识别，自动调控温度、pH、DO、浊度与光照，持续学习优化参数。",
    },
    Feature {
        title: "AR 第一视角",
        body: "鱼眼高清摄像头 + 电子云台，实现沉浸式水下漫游与远程陪伴。",
    },
    Feature {
        title: "自主巡航清洁",
        body: "微型刷毛/吸附装置边巡航边清洁，悬浮颗粒带回基站处理。",
    },
    Feature {
        title: "自动返航回充",
        body: "低电量触发视觉/信标导航，精准对接≥15W 无线充电基站。",
    },
    Feature {
        title: "多模态交互",
        body: "APP 精细操控 + 手势跟随 + 场景联动（灯光/投喂），自然流畅。",
    },
    Feature {
        title: "智慧养护建议",
        body: "长期数据学习，按鱼种与季节生成个性化策略与健康报告。",
    },
    Feature {
        title: "安全巡逻预警",
        body: "识别干烧/脱落/异常波动/异物，声光与 App 双通道告警。",
    },
    Feature {
        title: "缸内动态造景",
        body: "3D 扫描 + 点云分析，识别藻类与覆盖率，生成造景建议。",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSeries {
    pub id: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_SERIES: &str = "stardust";

pub const SERIES: [ProductSeries; 2] = [
    ProductSeries { id: "stardust", label: "星辰系列" },
    ProductSeries { id: "metascape", label: "元境系列" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub series: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub highlights: [&'static str; 3],
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        series: "stardust",
        name: "星辰·驭水",
        summary: "裸露金属管线与动力结构，强调驾驭感与性能张力。",
        highlights: [
            "球形/圆角矩形舱体，高透超白玻璃",
            "操控增强：急速冲刺与灵巧闪避",
            "桌面深海探索舱美学",
        ],
    },
    Product {
        series: "stardust",
        name: "星辰·潜望",
        summary: "完整球形视窗，沉浸式静谧观测体验，适合长时间观赏。",
        highlights: [
            "深海观测站语言，工业科技美学",
            "超广域 360° 视野",
            "适配客厅/办公室陈设",
        ],
    },
    Product {
        series: "metascape",
        name: "元境·蔚蓝",
        summary: "柔和赛博光效 + 磨砂舱体，与 VR/AR/元宇宙无缝联动。",
        highlights: [
            "数字资产化的“虚实共生鱼缸”",
            "社交分享与远程陪伴",
            "Z 世代潮玩定位",
        ],
    },
];

pub fn products_in(series: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS.iter().filter(move |p| p.series == series)
}

/// Labelled progress bar on the console panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge {
    pub label: &'static str,
    pub reading: &'static str,
    pub percent: u8,
}

pub const GAUGES: [Gauge; 3] = [
    Gauge { label: "溶解氧", reading: "8.3 mg/L", percent: 83 },
    Gauge { label: "温度", reading: "25.4 ℃", percent: 54 },
    Gauge { label: "pH 值", reading: "7.2", percent: 72 },
];

pub const CONSOLE_ACTIONS: [&str; 3] = ["一键投饵", "补光/造景", "排水/换水"];
pub const PHONE_ACTIONS: [&str; 3] = ["拍照", "录像", "灯光"];

pub const ARCHITECTURE: [Feature; 3] = [
    Feature {
        title: "RK3588S 应用与视觉引擎",
        body: "8 核 CPU + 6 TOPS NPU，承担视觉识别/多模态推理/云端通讯与人机界面。",
    },
    Feature {
        title: "GD32H7 实时控制",
        body: "可靠读取 pH/DO/ORP/TDS/浊度/液位/温度等传感并控制泵阀加热制冷等执行器。",
    },
    Feature {
        title: "ESP32‑S3 仿生鱼端",
        body: "低功耗通信 + 机体姿态/动力控制 + 返航定位与“仿生血液”产氧调度。",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRow {
    pub category: &'static str,
    pub parameter: &'static str,
    pub note: &'static str,
}

pub const SPEC_ROWS: [SpecRow; 8] = [
    SpecRow { category: "水族箱", parameter: "150×60×60 cm / ~540 L", note: "超白玻璃 / 亚克力，360° 广域视野" },
    SpecRow { category: "仿生鱼", parameter: "长度 30 cm / 5 段关节", note: "亚鲹式推进，~1.0 BL/s" },
    SpecRow { category: "AI 核心", parameter: "RK3588S • NPU 6 TOPS", note: "视觉/行为/健康识别" },
    SpecRow { category: "实时控制", parameter: "GD32H7 MCU", note: "多传感融合与闭环调节" },
    SpecRow { category: "通信", parameter: "Wi‑Fi 6 / BLE / 以太网", note: "云端/APP/本地 HMI" },
    SpecRow { category: "供氧", parameter: "“仿生血液”电化学", note: "碘化锌液流 + 微气泡扩散" },
    SpecRow { category: "回充", parameter: "≥15W 无线充电", note: "自动返航/对位充电" },
    SpecRow { category: "HMI", parameter: "7\" IPS 触控屏", note: "参数/预警/一键维护" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub version: &'static str,
    pub summary: &'static str,
    pub badge: &'static str,
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        version: "V1.0 机械仿生",
        summary: "多关节尾鳍，摆尾姿态接近真实；续航与噪声仍有短板。",
        badge: "原型探索",
    },
    Milestone {
        version: "V2.0 视感觉醒",
        summary: "机器视觉 + 手势跟随；水质传感接入；首代磁吸充电桩。",
        badge: "感知-预警",
    },
    Milestone {
        version: "V3.0 生态共生",
        summary: "“游动即产氧” + 自主运维闭环 + AR/元宇宙沉浸交互。",
        badge: "无人化运维",
    },
];

pub const CONTACT_PERKS: [&str; 3] = [
    "企业/高校/商业空间定制支持",
    "开放 API 与数字孪生接口",
    "原型机交付周期可议",
];

pub const SCENARIOS: [&str; 6] = [
    "家庭高端观赏",
    "商业空间装置",
    "科普/教育",
    "科研平台",
    "数字疗愈",
    "其他",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 3] = [
    FaqEntry {
        id: "q1",
        question: "“仿生血液”产氧是否需要额外维护？",
        answer: "日常仅需在系统提示时补充电解液并进行安全检查；AI 将按溶氧传感反馈自动调节产氧速率。",
    },
    FaqEntry {
        id: "q2",
        question: "停电或断网时系统如何工作？",
        answer: "本地 MCU 维持基础生命线（温度/供氧/水位）闭环；联网恢复后自动同步到云端与 App。",
    },
    FaqEntry {
        id: "q3",
        question: "是否支持第三方开发？",
        answer: "提供开放 API、WebSocket 实时流与数字孪生接口，便于科研与创客扩展。",
    },
];

pub const FOOTER_NOTE: &str = "本页面为演示站点：包含交互原型、数据示例与占位视觉。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_belongs_to_a_series() {
        for product in &PRODUCTS {
            assert!(SERIES.iter().any(|s| s.id == product.series), "{}", product.name);
        }
    }

    #[test]
    fn test_products_in_series() {
        let names: Vec<_> = products_in("stardust").map(|p| p.name).collect();
        assert_eq!(names, vec!["星辰·驭水", "星辰·潜望"]);
        assert_eq!(products_in("nebula").count(), 0);
    }

    #[test]
    fn test_faq_ids_unique() {
        let mut ids: Vec<_> = FAQ.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQ.len());
    }
}
