use crate::types::pricing::PriceBaseline;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: String,
    pub name: String,
    pub lineup: String,
    pub series: String,
    pub year: u16,
    pub processor: Processor,
    pub display: Display,
    pub gpu: Gpu,
    pub ram: Ram,
    pub storage: Storage,
    pub battery_wh: f32,
    pub weight_kg: f32,
    pub os: String,
    pub connectivity: Connectivity,
    pub pricing: PriceBaseline,
    #[serde(default)]
    pub processor_options: Vec<Processor>,
    #[serde(default)]
    pub display_options: Vec<Display>,
    #[serde(default)]
    pub gpu_options: Vec<Gpu>,
    #[serde(default)]
    pub ram_options: Vec<Ram>,
    #[serde(default)]
    pub storage_options: Vec<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editorial: Option<Editorial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxCompat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    /// Benchmark table key, e.g. "Intel Core Ultra 7 155U".
    pub name: String,
    pub cores: u8,
    pub threads: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp_watts: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    #[strum(serialize = "TN")]
    Tn,
    #[strum(serialize = "IPS")]
    Ips,
    #[strum(serialize = "Mini LED")]
    MiniLed,
    #[strum(serialize = "OLED")]
    Oled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub size_inch: f32,
    pub width: u32,
    pub height: u32,
    pub refresh_hz: u16,
    pub panel: PanelType,
    pub brightness_nits: u16,
    /// sRGB coverage in percent.
    pub srgb_coverage: u8,
    #[serde(default)]
    pub touch: bool,
}

impl Display {
    pub fn name(&self) -> String {
        format!(
            "{:.1}\" {}x{} {} {}Hz",
            self.size_inch, self.width, self.height, self.panel, self.refresh_hz
        )
    }

    pub fn megapixels(&self) -> f32 {
        (self.width as f32 * self.height as f32) / 1_000_000.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gpu {
    /// Benchmark table key, e.g. "NVIDIA GeForce RTX 4060 Laptop".
    pub name: String,
    #[serde(default)]
    pub integrated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_gb: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tgp_watts: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub size_gb: u16,
    pub kind: String,
    pub speed_mts: u32,
    #[serde(default)]
    pub soldered: bool,
}

impl Ram {
    pub fn name(&self) -> String {
        format!("{} GB {}-{}", self.size_gb, self.kind, self.speed_mts)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub size_gb: u32,
    pub kind: String,
    #[serde(default = "default_slots")]
    pub slots: u8,
}

fn default_slots() -> u8 {
    1
}

impl Storage {
    pub fn name(&self) -> String {
        if self.size_gb >= 1024 && self.size_gb % 1024 == 0 {
            format!("{} TB {}", self.size_gb / 1024, self.kind)
        } else {
            format!("{} GB {}", self.size_gb, self.kind)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WifiStandard {
    Wifi5,
    Wifi6,
    Wifi6e,
    Wifi7,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    #[serde(default)]
    pub thunderbolt: u8,
    #[serde(default)]
    pub usb_c: u8,
    #[serde(default)]
    pub usb_a: u8,
    #[serde(default)]
    pub hdmi: bool,
    #[serde(default)]
    pub ethernet: bool,
    #[serde(default)]
    pub sd_card: bool,
    pub wifi: WifiStandard,
    #[serde(default)]
    pub cellular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub summary: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinuxStatus {
    Certified,
    Works,
    Partial,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxCompat {
    pub status: LinuxStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
