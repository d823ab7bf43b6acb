//! Receiver mode controller.
//!
//! Each mode change is an ordered list of CFG-VALSET commands written to the
//! RAM layer. Inputs are validated before the first write; the first write
//! failure aborts the sequence and the status registry keeps its old mode.
//! There is no read-back from the receiver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use basecast_core::coord::{
    self, ACCURACY_SCALE, HEIGHT_HP_DIGITS, HEIGHT_SCALE, LATLON_HP_DIGITS, LATLON_SCALE,
};

use crate::receiver::ReceiverLink;
use crate::status::{StatusKey, StatusRegistry};
use crate::StationError;

/// Fixed-position accuracy reported to the receiver, in 0.1 mm.
pub const FIXED_POS_ACC: u32 = 100;

/// NMEA sentences switched off on UART1 at startup.
const NMEA_DISABLED: &[&str] = &["GLL", "GSA", "GSV", "RMC", "VTG"];
/// NMEA sentences kept on UART1 for the status reader.
const NMEA_ENABLED: &[&str] = &["GGA", "GST"];
/// RTCM3 messages emitted on UART2 once the receiver is a base.
const RTCM_TYPES: &[u16] = &[1005, 1074, 1084, 1094, 1124, 1230];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverMode {
    Rover,
    SurveyIn,
    Fixed,
}

impl ReceiverMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReceiverMode::Rover => "Rover",
            ReceiverMode::SurveyIn => "Base-Survey",
            ReceiverMode::Fixed => "Base-Fixed",
        }
    }
}

fn valset(key: &str, value: impl std::fmt::Display) -> String {
    format!("CFG-VALSET 0 1 0 0 CFG-{key} {value}")
}

#[derive(Clone)]
pub struct ModeController {
    link: ReceiverLink,
    status: StatusRegistry,
    settle_delay: Duration,
    mode: Arc<Mutex<Option<ReceiverMode>>>,
    /// Serialises command sequences so two changes never interleave.
    op: Arc<tokio::sync::Mutex<()>>,
}

impl ModeController {
    pub fn new(link: ReceiverLink, status: StatusRegistry, settle_delay: Duration) -> Self {
        Self {
            link,
            status,
            settle_delay,
            mode: Arc::new(Mutex::new(None)),
            op: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Last mode successfully commanded, `None` before the first change.
    pub fn current_mode(&self) -> Option<ReceiverMode> {
        self.mode.lock().ok().and_then(|m| *m)
    }

    /// Startup configuration, ending in rover mode.
    pub async fn set_defaults(&self, uart2_baud: u32) -> Result<(), StationError> {
        let mut commands = Vec::new();
        for id in NMEA_DISABLED {
            commands.push(valset(&format!("MSGOUT-NMEA_ID_{id}_UART1"), 0));
        }
        for id in NMEA_ENABLED {
            commands.push(valset(&format!("MSGOUT-NMEA_ID_{id}_UART1"), 1));
        }
        // TXT sentences are information messages, not a MSGOUT entry.
        commands.push(valset("INFMSG-NMEA_UART1", 0));
        commands.push(valset("NMEA-HIGHPREC", 1));
        commands.push(valset("UART1INPROT-RTCM3X", 0));
        commands.push(valset("UART1OUTPROT-RTCM3X", 0));
        commands.push(valset("UART2-BAUDRATE", uart2_baud));
        for t in RTCM_TYPES {
            commands.push(valset(&format!("MSGOUT-RTCM_3X_TYPE{t}_UART2"), 1));
        }

        {
            let _op = self.op.lock().await;
            self.send_all(&commands).await?;
        }
        tracing::info!(commands = commands.len(), uart2_baud, "receiver defaults applied");
        self.set_rover().await
    }

    pub async fn set_rover(&self) -> Result<(), StationError> {
        let commands = [valset("TMODE-MODE", 0), valset("UART2OUTPROT-RTCM3X", 0)];
        self.apply(ReceiverMode::Rover, &commands).await
    }

    /// Start a survey. `accuracy_limit_m` is metres as a decimal string.
    pub async fn set_survey_in(
        &self,
        min_duration_secs: u32,
        accuracy_limit_m: &str,
    ) -> Result<(), StationError> {
        let accuracy = coord::parse_scaled(accuracy_limit_m, ACCURACY_SCALE)?;
        let commands = [
            valset("TMODE-SVIN_MIN_DUR", min_duration_secs),
            valset("TMODE-SVIN_ACC_LIMIT", accuracy),
            valset("TMODE-MODE", 1),
            valset("UART2OUTPROT-RTCM3X", 1),
        ];
        self.apply(ReceiverMode::SurveyIn, &commands).await
    }

    /// Fix the base at `lat`/`lon` (degrees) and `alt` (metres), all decimal strings.
    pub async fn set_fixed(&self, lat: &str, lon: &str, alt: &str) -> Result<(), StationError> {
        let lat = coord::decompose(lat, LATLON_SCALE, LATLON_HP_DIGITS)?;
        let lon = coord::decompose(lon, LATLON_SCALE, LATLON_HP_DIGITS)?;
        let alt = coord::decompose(alt, HEIGHT_SCALE, HEIGHT_HP_DIGITS)?;

        let commands = [
            valset("TMODE-POS_TYPE", 1),
            valset("TMODE-LAT", lat.primary),
            valset("TMODE-LAT_HP", lat.high_precision),
            valset("TMODE-LON", lon.primary),
            valset("TMODE-LON_HP", lon.high_precision),
            valset("TMODE-HEIGHT", alt.primary),
            valset("TMODE-HEIGHT_HP", alt.high_precision),
            valset("TMODE-FIXED_POS_ACC", FIXED_POS_ACC),
            valset("TMODE-MODE", 2),
            valset("UART2OUTPROT-RTCM3X", 1),
        ];
        self.apply(ReceiverMode::Fixed, &commands).await
    }

    async fn apply(&self, mode: ReceiverMode, commands: &[String]) -> Result<(), StationError> {
        let _op = self.op.lock().await;
        if let Err(e) = self.send_all(commands).await {
            tracing::warn!(mode = mode.as_str(), error = %e, "mode change aborted");
            return Err(e);
        }

        if let Ok(mut current) = self.mode.lock() {
            *current = Some(mode);
        }
        self.status.set(StatusKey::GnssMode, mode.as_str());
        tracing::info!(mode = mode.as_str(), "receiver mode set");

        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
        Ok(())
    }

    async fn send_all(&self, commands: &[String]) -> Result<(), StationError> {
        for descriptor in commands {
            self.link.send_command(descriptor).await?;
        }
        Ok(())
    }
}
