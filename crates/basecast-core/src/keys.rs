//! Configuration keys accepted by `CFG-VALSET`, `CFG-VALDEL` and `CFG-VALGET`.
//!
//! Names are written without the `CFG-` prefix. Bits 28..31 of every id
//! encode the value width; the table below is checked against that.

use crate::ubx::ValueKind::{self, *};

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigKey {
    pub name: &'static str,
    pub id: u32,
    pub kind: ValueKind,
}

const fn key(name: &'static str, id: u32, kind: ValueKind) -> ConfigKey {
    ConfigKey { name, id, kind }
}

pub fn by_name(name: &str) -> Option<&'static ConfigKey> {
    KEYS.iter().find(|k| k.name == name)
}

pub fn by_id(id: u32) -> Option<&'static ConfigKey> {
    KEYS.iter().find(|k| k.id == id)
}

/// Value width in bytes as encoded in the key id.
pub fn width_from_id(id: u32) -> Option<usize> {
    match (id >> 28) & 0x7 {
        1 | 2 => Some(1),
        3 => Some(2),
        4 => Some(4),
        5 => Some(8),
        _ => None,
    }
}

pub static KEYS: &[ConfigKey] = &[
    // GEOFENCE
    key("GEOFENCE-CONFLVL", 0x2024_0011, U1),
    key("GEOFENCE-USE_PIO", 0x1024_0012, U1),
    key("GEOFENCE-PINPOL", 0x2024_0013, U1),
    key("GEOFENCE-PIN", 0x2024_0014, U1),
    key("GEOFENCE-USE_FENCE1", 0x1024_0020, U1),
    key("GEOFENCE-FENCE1_LAT", 0x4024_0021, I4),
    key("GEOFENCE-FENCE1_LON", 0x4024_0022, I4),
    key("GEOFENCE-FENCE1_RAD", 0x4024_0023, U4),
    key("GEOFENCE-USE_FENCE2", 0x1024_0030, U1),
    key("GEOFENCE-FENCE2_LAT", 0x4024_0031, I4),
    key("GEOFENCE-FENCE2_LON", 0x4024_0032, I4),
    key("GEOFENCE-FENCE2_RAD", 0x4024_0033, U4),
    key("GEOFENCE-USE_FENCE3", 0x1024_0040, U1),
    key("GEOFENCE-FENCE3_LAT", 0x4024_0041, I4),
    key("GEOFENCE-FENCE3_LON", 0x4024_0042, I4),
    key("GEOFENCE-FENCE3_RAD", 0x4024_0043, U4),
    key("GEOFENCE-USE_FENCE4", 0x1024_0050, U1),
    key("GEOFENCE-FENCE4_LAT", 0x4024_0051, I4),
    key("GEOFENCE-FENCE4_LON", 0x4024_0052, I4),
    key("GEOFENCE-FENCE4_RAD", 0x4024_0053, U4),

    // HW
    key("HW-ANT_CFG_VOLTCTRL", 0x10a3_002e, U1),
    key("HW-ANT_CFG_SHORTDET", 0x10a3_002f, U1),
    key("HW-ANT_CFG_SHORTDET_POL", 0x10a3_0030, U1),
    key("HW-ANT_CFG_OPENDET", 0x10a3_0031, U1),
    key("HW-ANT_CFG_OPENDET_POL", 0x10a3_0032, U1),
    key("HW-ANT_CFG_PWRDOWN", 0x10a3_0033, U1),
    key("HW-ANT_CFG_PWRDOWN_POL", 0x10a3_0034, U1),
    key("HW-ANT_CFG_RECOVER", 0x10a3_0035, U1),
    key("HW-ANT_SUP_SWITCH_PIN", 0x20a3_0036, U1),
    key("HW-ANT_SUP_SHORT_PIN", 0x20a3_0037, U1),
    key("HW-ANT_SUP_OPEN_PIN", 0x20a3_0038, U1),

    // I2C
    key("I2C-ADDRESS", 0x2051_0001, U1),
    key("I2C-EXTENDEDTIMEOUT", 0x1051_0002, U1),
    key("I2C-ENABLED", 0x1051_0003, U1),

    // I2CINPROT
    key("I2CINPROT-UBX", 0x1071_0001, U1),
    key("I2CINPROT-NMEA", 0x1071_0002, U1),
    key("I2CINPROT-RTCM2X", 0x1071_0003, U1),
    key("I2CINPROT-RTCM3X", 0x1071_0004, U1),

    // I2COUTPROT
    key("I2COUTPROT-UBX", 0x1072_0001, U1),
    key("I2COUTPROT-NMEA", 0x1072_0002, U1),
    key("I2COUTPROT-RTCM3X", 0x1072_0004, U1),

    // INFMSG
    key("INFMSG-UBX_I2C", 0x2092_0001, U1),
    key("INFMSG-UBX_UART1", 0x2092_0002, U1),
    key("INFMSG-UBX_UART2", 0x2092_0003, U1),
    key("INFMSG-UBX_USB", 0x2092_0004, U1),
    key("INFMSG-UBX_SPI", 0x2092_0005, U1),
    key("INFMSG-NMEA_I2C", 0x2092_0006, U1),
    key("INFMSG-NMEA_UART1", 0x2092_0007, U1),
    key("INFMSG-NMEA_UART2", 0x2092_0008, U1),
    key("INFMSG-NMEA_USB", 0x2092_0009, U1),
    key("INFMSG-NMEA_SPI", 0x2092_000a, U1),

    // ITFM
    key("ITFM-BBTHRESHOLD", 0x2041_0001, U1),
    key("ITFM-CWTHRESHOLD", 0x2041_0002, U1),
    key("ITFM-ENABLE", 0x1041_000d, U1),
    key("ITFM-ANTSETTING", 0x2041_0010, U1),
    key("ITFM-ENABLE_AUX", 0x1041_0013, U1),

    // LOGFILTER
    key("LOGFILTER-RECORD_ENA", 0x10de_0002, U1),
    key("LOGFILTER-ONCE_PER_WAKE_UP_ENA", 0x10de_0003, U1),
    key("LOGFILTER-APPLY_ALL_FILTERS", 0x10de_0004, U1),
    key("LOGFILTER-MIN_INTERVAL", 0x30de_0005, U2),
    key("LOGFILTER-TIME_THRS", 0x30de_0006, U2),
    key("LOGFILTER-SPEED_THRS", 0x30de_0007, U2),
    key("LOGFILTER-POSITION_THRS", 0x40de_0008, U4),

    // MOT
    key("MOT-GNSSSPEED_THRS", 0x2025_0038, U1),
    key("MOT-GNSSDIST_THRS", 0x3025_003b, U2),

    // MSGOUT
    key("MSGOUT-NMEA_ID_DTM_I2C", 0x2091_00a6, U1),
    key("MSGOUT-NMEA_ID_DTM_SPI", 0x2091_00aa, U1),
    key("MSGOUT-NMEA_ID_DTM_UART1", 0x2091_00a7, U1),
    key("MSGOUT-NMEA_ID_DTM_UART2", 0x2091_00a8, U1),
    key("MSGOUT-NMEA_ID_DTM_USB", 0x2091_00a9, U1),
    key("MSGOUT-NMEA_ID_GBS_I2C", 0x2091_00dd, U1),
    key("MSGOUT-NMEA_ID_GBS_SPI", 0x2091_00e1, U1),
    key("MSGOUT-NMEA_ID_GBS_UART1", 0x2091_00de, U1),
    key("MSGOUT-NMEA_ID_GBS_UART2", 0x2091_00df, U1),
    key("MSGOUT-NMEA_ID_GBS_USB", 0x2091_00e0, U1),
    key("MSGOUT-NMEA_ID_GGA_I2C", 0x2091_00ba, U1),
    key("MSGOUT-NMEA_ID_GGA_SPI", 0x2091_00be, U1),
    key("MSGOUT-NMEA_ID_GGA_UART1", 0x2091_00bb, U1),
    key("MSGOUT-NMEA_ID_GGA_UART2", 0x2091_00bc, U1),
    key("MSGOUT-NMEA_ID_GGA_USB", 0x2091_00bd, U1),
    key("MSGOUT-NMEA_ID_GLL_I2C", 0x2091_00c9, U1),
    key("MSGOUT-NMEA_ID_GLL_SPI", 0x2091_00cd, U1),
    key("MSGOUT-NMEA_ID_GLL_UART1", 0x2091_00ca, U1),
    key("MSGOUT-NMEA_ID_GLL_UART2", 0x2091_00cb, U1),
    key("MSGOUT-NMEA_ID_GLL_USB", 0x2091_00cc, U1),
    key("MSGOUT-NMEA_ID_GNS_I2C", 0x2091_00b5, U1),
    key("MSGOUT-NMEA_ID_GNS_SPI", 0x2091_00b9, U1),
    key("MSGOUT-NMEA_ID_GNS_UART1", 0x2091_00b6, U1),
    key("MSGOUT-NMEA_ID_GNS_UART2", 0x2091_00b7, U1),
    key("MSGOUT-NMEA_ID_GNS_USB", 0x2091_00b8, U1),
    key("MSGOUT-NMEA_ID_GRS_I2C", 0x2091_00ce, U1),
    key("MSGOUT-NMEA_ID_GRS_SPI", 0x2091_00d2, U1),
    key("MSGOUT-NMEA_ID_GRS_UART1", 0x2091_00cf, U1),
    key("MSGOUT-NMEA_ID_GRS_UART2", 0x2091_00d0, U1),
    key("MSGOUT-NMEA_ID_GRS_USB", 0x2091_00d1, U1),
    key("MSGOUT-NMEA_ID_GSA_I2C", 0x2091_00bf, U1),
    key("MSGOUT-NMEA_ID_GSA_SPI", 0x2091_00c3, U1),
    key("MSGOUT-NMEA_ID_GSA_UART1", 0x2091_00c0, U1),
    key("MSGOUT-NMEA_ID_GSA_UART2", 0x2091_00c1, U1),
    key("MSGOUT-NMEA_ID_GSA_USB", 0x2091_00c2, U1),
    key("MSGOUT-NMEA_ID_GST_I2C", 0x2091_00d3, U1),
    key("MSGOUT-NMEA_ID_GST_SPI", 0x2091_00d7, U1),
    key("MSGOUT-NMEA_ID_GST_UART1", 0x2091_00d4, U1),
    key("MSGOUT-NMEA_ID_GST_UART2", 0x2091_00d5, U1),
    key("MSGOUT-NMEA_ID_GST_USB", 0x2091_00d6, U1),
    key("MSGOUT-NMEA_ID_GSV_I2C", 0x2091_00c4, U1),
    key("MSGOUT-NMEA_ID_GSV_SPI", 0x2091_00c8, U1),
    key("MSGOUT-NMEA_ID_GSV_UART1", 0x2091_00c5, U1),
    key("MSGOUT-NMEA_ID_GSV_UART2", 0x2091_00c6, U1),
    key("MSGOUT-NMEA_ID_GSV_USB", 0x2091_00c7, U1),
    key("MSGOUT-NMEA_ID_RMC_I2C", 0x2091_00ab, U1),
    key("MSGOUT-NMEA_ID_RMC_SPI", 0x2091_00af, U1),
    key("MSGOUT-NMEA_ID_RMC_UART1", 0x2091_00ac, U1),
    key("MSGOUT-NMEA_ID_RMC_UART2", 0x2091_00ad, U1),
    key("MSGOUT-NMEA_ID_RMC_USB", 0x2091_00ae, U1),
    key("MSGOUT-NMEA_ID_VLW_I2C", 0x2091_00e7, U1),
    key("MSGOUT-NMEA_ID_VLW_SPI", 0x2091_00eb, U1),
    key("MSGOUT-NMEA_ID_VLW_UART1", 0x2091_00e8, U1),
    key("MSGOUT-NMEA_ID_VLW_UART2", 0x2091_00e9, U1),
    key("MSGOUT-NMEA_ID_VLW_USB", 0x2091_00ea, U1),
    key("MSGOUT-NMEA_ID_VTG_I2C", 0x2091_00b0, U1),
    key("MSGOUT-NMEA_ID_VTG_SPI", 0x2091_00b4, U1),
    key("MSGOUT-NMEA_ID_VTG_UART1", 0x2091_00b1, U1),
    key("MSGOUT-NMEA_ID_VTG_UART2", 0x2091_00b2, U1),
    key("MSGOUT-NMEA_ID_VTG_USB", 0x2091_00b3, U1),
    key("MSGOUT-NMEA_ID_ZDA_I2C", 0x2091_00d8, U1),
    key("MSGOUT-NMEA_ID_ZDA_SPI", 0x2091_00dc, U1),
    key("MSGOUT-NMEA_ID_ZDA_UART1", 0x2091_00d9, U1),
    key("MSGOUT-NMEA_ID_ZDA_UART2", 0x2091_00da, U1),
    key("MSGOUT-NMEA_ID_ZDA_USB", 0x2091_00db, U1),
    key("MSGOUT-PUBX_ID_POLYP_I2C", 0x2091_00ec, U1),
    key("MSGOUT-PUBX_ID_POLYP_SPI", 0x2091_00f0, U1),
    key("MSGOUT-PUBX_ID_POLYP_UART1", 0x2091_00ed, U1),
    key("MSGOUT-PUBX_ID_POLYP_UART2", 0x2091_00ee, U1),
    key("MSGOUT-PUBX_ID_POLYP_USB", 0x2091_00ef, U1),
    key("MSGOUT-PUBX_ID_POLYS_I2C", 0x2091_00f1, U1),
    key("MSGOUT-PUBX_ID_POLYS_SPI", 0x2091_00f5, U1),
    key("MSGOUT-PUBX_ID_POLYS_UART1", 0x2091_00f2, U1),
    key("MSGOUT-PUBX_ID_POLYS_UART2", 0x2091_00f3, U1),
    key("MSGOUT-PUBX_ID_POLYS_USB", 0x2091_00f4, U1),
    key("MSGOUT-PUBX_ID_POLYT_I2C", 0x2091_00f6, U1),
    key("MSGOUT-PUBX_ID_POLYT_SPI", 0x2091_00fa, U1),
    key("MSGOUT-PUBX_ID_POLYT_UART1", 0x2091_00f7, U1),
    key("MSGOUT-PUBX_ID_POLYT_UART2", 0x2091_00f8, U1),
    key("MSGOUT-PUBX_ID_POLYT_USB", 0x2091_00f9, U1),
    key("MSGOUT-RTCM_3X_TYPE1005_I2C", 0x2091_02bd, U1),
    key("MSGOUT-RTCM_3X_TYPE1005_SPI", 0x2091_02c1, U1),
    key("MSGOUT-RTCM_3X_TYPE1005_UART1", 0x2091_02be, U1),
    key("MSGOUT-RTCM_3X_TYPE1005_UART2", 0x2091_02bf, U1),
    key("MSGOUT-RTCM_3X_TYPE1005_USB", 0x2091_02c0, U1),
    key("MSGOUT-RTCM_3X_TYPE1074_I2C", 0x2091_035e, U1),
    key("MSGOUT-RTCM_3X_TYPE1074_SPI", 0x2091_0362, U1),
    key("MSGOUT-RTCM_3X_TYPE1074_UART1", 0x2091_035f, U1),
    key("MSGOUT-RTCM_3X_TYPE1074_UART2", 0x2091_0360, U1),
    key("MSGOUT-RTCM_3X_TYPE1074_USB", 0x2091_0361, U1),
    key("MSGOUT-RTCM_3X_TYPE1077_I2C", 0x2091_02cc, U1),
    key("MSGOUT-RTCM_3X_TYPE1077_SPI", 0x2091_02d0, U1),
    key("MSGOUT-RTCM_3X_TYPE1077_UART1", 0x2091_02cd, U1),
    key("MSGOUT-RTCM_3X_TYPE1077_UART2", 0x2091_02ce, U1),
    key("MSGOUT-RTCM_3X_TYPE1077_USB", 0x2091_02cf, U1),
    key("MSGOUT-RTCM_3X_TYPE1087_I2C", 0x2091_02d1, U1),
    key("MSGOUT-RTCM_3X_TYPE1084_SPI", 0x2091_0367, U1),
    key("MSGOUT-RTCM_3X_TYPE1084_UART1", 0x2091_0364, U1),
    key("MSGOUT-RTCM_3X_TYPE1084_UART2", 0x2091_0365, U1),
    key("MSGOUT-RTCM_3X_TYPE1084_USB", 0x2091_0366, U1),
    key("MSGOUT-RTCM_3X_TYPE1087_SPI", 0x2091_02d5, U1),
    key("MSGOUT-RTCM_3X_TYPE1087_UART1", 0x2091_02d2, U1),
    key("MSGOUT-RTCM_3X_TYPE1087_UART2", 0x2091_02d3, U1),
    key("MSGOUT-RTCM_3X_TYPE1087_USB", 0x2091_02d4, U1),
    key("MSGOUT-RTCM_3X_TYPE1094_I2C", 0x2091_0368, U1),
    key("MSGOUT-RTCM_3X_TYPE1094_SPI", 0x2091_036c, U1),
    key("MSGOUT-RTCM_3X_TYPE1094_UART1", 0x2091_0369, U1),
    key("MSGOUT-RTCM_3X_TYPE1094_UART2", 0x2091_036a, U1),
    key("MSGOUT-RTCM_3X_TYPE1094_USB", 0x2091_036b, U1),
    key("MSGOUT-RTCM_3X_TYPE1097_I2C", 0x2091_0318, U1),
    key("MSGOUT-RTCM_3X_TYPE1097_SPI", 0x2091_031c, U1),
    key("MSGOUT-RTCM_3X_TYPE1097_UART1", 0x2091_0319, U1),
    key("MSGOUT-RTCM_3X_TYPE1097_UART2", 0x2091_031a, U1),
    key("MSGOUT-RTCM_3X_TYPE1097_USB", 0x2091_031b, U1),
    key("MSGOUT-RTCM_3X_TYPE1124_I2C", 0x2091_036d, U1),
    key("MSGOUT-RTCM_3X_TYPE1124_SPI", 0x2091_0371, U1),
    key("MSGOUT-RTCM_3X_TYPE1124_UART1", 0x2091_036e, U1),
    key("MSGOUT-RTCM_3X_TYPE1124_UART2", 0x2091_036f, U1),
    key("MSGOUT-RTCM_3X_TYPE1124_USB", 0x2091_0370, U1),
    key("MSGOUT-RTCM_3X_TYPE1127_I2C", 0x2091_02d6, U1),
    key("MSGOUT-RTCM_3X_TYPE1127_SPI", 0x2091_02da, U1),
    key("MSGOUT-RTCM_3X_TYPE1127_UART1", 0x2091_02d7, U1),
    key("MSGOUT-RTCM_3X_TYPE1127_UART2", 0x2091_02d8, U1),
    key("MSGOUT-RTCM_3X_TYPE1127_USB", 0x2091_02d9, U1),
    key("MSGOUT-RTCM_3X_TYPE1230_I2C", 0x2091_0303, U1),
    key("MSGOUT-RTCM_3X_TYPE1230_SPI", 0x2091_0307, U1),
    key("MSGOUT-RTCM_3X_TYPE1230_UART1", 0x2091_0304, U1),
    key("MSGOUT-RTCM_3X_TYPE1230_UART2", 0x2091_0305, U1),
    key("MSGOUT-RTCM_3X_TYPE1230_USB", 0x2091_0306, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_0_I2C", 0x2091_02fe, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_0_SPI", 0x2091_0302, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_0_UART1", 0x2091_02ff, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_0_UART2", 0x2091_0300, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_0_USB", 0x2091_0301, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_1_I2C", 0x2091_0381, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_1_SPI", 0x2091_0385, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_1_UART1", 0x2091_0382, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_1_UART2", 0x2091_0383, U1),
    key("MSGOUT-RTCM_3X_TYPE4072_1_USB", 0x2091_0384, U1),
    key("MSGOUT-UBX_LOG_INFO_I2C", 0x2091_0259, U1),
    key("MSGOUT-UBX_LOG_INFO_SPI", 0x2091_025d, U1),
    key("MSGOUT-UBX_LOG_INFO_UART1", 0x2091_025a, U1),
    key("MSGOUT-UBX_LOG_INFO_UART2", 0x2091_025b, U1),
    key("MSGOUT-UBX_LOG_INFO_USB", 0x2091_025c, U1),
    key("MSGOUT-UBX_MON_COMMS_I2C", 0x2091_034f, U1),
    key("MSGOUT-UBX_MON_COMMS_SPI", 0x2091_0353, U1),
    key("MSGOUT-UBX_MON_COMMS_UART1", 0x2091_0350, U1),
    key("MSGOUT-UBX_MON_COMMS_UART2", 0x2091_0351, U1),
    key("MSGOUT-UBX_MON_COMMS_USB", 0x2091_0352, U1),
    key("MSGOUT-UBX_MON_HW2_I2C", 0x2091_01b9, U1),
    key("MSGOUT-UBX_MON_HW2_SPI", 0x2091_01bd, U1),
    key("MSGOUT-UBX_MON_HW2_UART1", 0x2091_01ba, U1),
    key("MSGOUT-UBX_MON_HW2_UART2", 0x2091_01bb, U1),
    key("MSGOUT-UBX_MON_HW2_USB", 0x2091_01bc, U1),
    key("MSGOUT-UBX_MON_HW3_I2C", 0x2091_0354, U1),
    key("MSGOUT-UBX_MON_HW3_SPI", 0x2091_0358, U1),
    key("MSGOUT-UBX_MON_HW3_UART1", 0x2091_0355, U1),
    key("MSGOUT-UBX_MON_HW3_UART2", 0x2091_0356, U1),
    key("MSGOUT-UBX_MON_HW3_USB", 0x2091_0357, U1),
    key("MSGOUT-UBX_MON_HW_I2C", 0x2091_01b4, U1),
    key("MSGOUT-UBX_MON_HW_SPI", 0x2091_01b8, U1),
    key("MSGOUT-UBX_MON_HW_UART1", 0x2091_01b5, U1),
    key("MSGOUT-UBX_MON_HW_UART2", 0x2091_01b6, U1),
    key("MSGOUT-UBX_MON_HW_USB", 0x2091_01b7, U1),
    key("MSGOUT-UBX_MON_IO_I2C", 0x2091_01a5, U1),
    key("MSGOUT-UBX_MON_IO_SPI", 0x2091_01a9, U1),
    key("MSGOUT-UBX_MON_IO_UART1", 0x2091_01a6, U1),
    key("MSGOUT-UBX_MON_IO_UART2", 0x2091_01a7, U1),
    key("MSGOUT-UBX_MON_IO_USB", 0x2091_01a8, U1),
    key("MSGOUT-UBX_MON_MSGPP_I2C", 0x2091_0196, U1),
    key("MSGOUT-UBX_MON_MSGPP_SPI", 0x2091_019a, U1),
    key("MSGOUT-UBX_MON_MSGPP_UART1", 0x2091_0197, U1),
    key("MSGOUT-UBX_MON_MSGPP_UART2", 0x2091_0198, U1),
    key("MSGOUT-UBX_MON_MSGPP_USB", 0x2091_0199, U1),
    key("MSGOUT-UBX_MON_RF_I2C", 0x2091_0359, U1),
    key("MSGOUT-UBX_MON_RF_SPI", 0x2091_035d, U1),
    key("MSGOUT-UBX_MON_RF_UART1", 0x2091_035a, U1),
    key("MSGOUT-UBX_MON_RF_UART2", 0x2091_035b, U1),
    key("MSGOUT-UBX_MON_RF_USB", 0x2091_035c, U1),
    key("MSGOUT-UBX_MON_RXBUF_I2C", 0x2091_01a0, U1),
    key("MSGOUT-UBX_MON_RXBUF_SPI", 0x2091_01a4, U1),
    key("MSGOUT-UBX_MON_RXBUF_UART1", 0x2091_01a1, U1),
    key("MSGOUT-UBX_MON_RXBUF_UART2", 0x2091_01a2, U1),
    key("MSGOUT-UBX_MON_RXBUF_USB", 0x2091_01a3, U1),
    key("MSGOUT-UBX_MON_RXR_I2C", 0x2091_0187, U1),
    key("MSGOUT-UBX_MON_RXR_SPI", 0x2091_018b, U1),
    key("MSGOUT-UBX_MON_RXR_UART1", 0x2091_0188, U1),
    key("MSGOUT-UBX_MON_RXR_UART2", 0x2091_0189, U1),
    key("MSGOUT-UBX_MON_RXR_USB", 0x2091_018a, U1),
    key("MSGOUT-UBX_MON_TXBUF_I2C", 0x2091_019b, U1),
    key("MSGOUT-UBX_MON_TXBUF_SPI", 0x2091_019f, U1),
    key("MSGOUT-UBX_MON_TXBUF_UART1", 0x2091_019c, U1),
    key("MSGOUT-UBX_MON_TXBUF_UART2", 0x2091_019d, U1),
    key("MSGOUT-UBX_MON_TXBUF_USB", 0x2091_019e, U1),
    key("MSGOUT-UBX_NAV_CLOCK_I2C", 0x2091_0065, U1),
    key("MSGOUT-UBX_NAV_CLOCK_SPI", 0x2091_0069, U1),
    key("MSGOUT-UBX_NAV_CLOCK_UART1", 0x2091_0066, U1),
    key("MSGOUT-UBX_NAV_CLOCK_UART2", 0x2091_0067, U1),
    key("MSGOUT-UBX_NAV_CLOCK_USB", 0x2091_0068, U1),
    key("MSGOUT-UBX_NAV_DOP_I2C", 0x2091_0038, U1),
    key("MSGOUT-UBX_NAV_DOP_SPI", 0x2091_003c, U1),
    key("MSGOUT-UBX_NAV_DOP_UART1", 0x2091_0039, U1),
    key("MSGOUT-UBX_NAV_DOP_UART2", 0x2091_003a, U1),
    key("MSGOUT-UBX_NAV_DOP_USB", 0x2091_003b, U1),
    key("MSGOUT-UBX_NAV_EOE_I2C", 0x2091_015f, U1),
    key("MSGOUT-UBX_NAV_EOE_SPI", 0x2091_0163, U1),
    key("MSGOUT-UBX_NAV_EOE_UART1", 0x2091_0160, U1),
    key("MSGOUT-UBX_NAV_EOE_UART2", 0x2091_0161, U1),
    key("MSGOUT-UBX_NAV_EOE_USB", 0x2091_0162, U1),
    key("MSGOUT-UBX_NAV_GEOFENCE_I2C", 0x2091_00a1, U1),
    key("MSGOUT-UBX_NAV_GEOFENCE_SPI", 0x2091_00a5, U1),
    key("MSGOUT-UBX_NAV_GEOFENCE_UART1", 0x2091_00a2, U1),
    key("MSGOUT-UBX_NAV_GEOFENCE_UART2", 0x2091_00a3, U1),
    key("MSGOUT-UBX_NAV_GEOFENCE_USB", 0x2091_00a4, U1),
    key("MSGOUT-UBX_NAV_HPPOSECEF_I2C", 0x2091_002e, U1),
    key("MSGOUT-UBX_NAV_HPPOSECEF_SPI", 0x2091_0032, U1),
    key("MSGOUT-UBX_NAV_HPPOSECEF_UART1", 0x2091_002f, U1),
    key("MSGOUT-UBX_NAV_HPPOSECEF_UART2", 0x2091_0030, U1),
    key("MSGOUT-UBX_NAV_HPPOSECEF_USB", 0x2091_0031, U1),
    key("MSGOUT-UBX_NAV_HPPOSLLH_I2C", 0x2091_0033, U1),
    key("MSGOUT-UBX_NAV_HPPOSLLH_SPI", 0x2091_0037, U1),
    key("MSGOUT-UBX_NAV_HPPOSLLH_UART1", 0x2091_0034, U1),
    key("MSGOUT-UBX_NAV_HPPOSLLH_UART2", 0x2091_0035, U1),
    key("MSGOUT-UBX_NAV_HPPOSLLH_USB", 0x2091_0036, U1),
    key("MSGOUT-UBX_NAV_ODO_I2C", 0x2091_007e, U1),
    key("MSGOUT-UBX_NAV_ODO_SPI", 0x2091_0082, U1),
    key("MSGOUT-UBX_NAV_ODO_UART1", 0x2091_007f, U1),
    key("MSGOUT-UBX_NAV_ODO_UART2", 0x2091_0080, U1),
    key("MSGOUT-UBX_NAV_ODO_USB", 0x2091_0081, U1),
    key("MSGOUT-UBX_NAV_ORB_I2C", 0x2091_0010, U1),
    key("MSGOUT-UBX_NAV_ORB_SPI", 0x2091_0014, U1),
    key("MSGOUT-UBX_NAV_ORB_UART1", 0x2091_0011, U1),
    key("MSGOUT-UBX_NAV_ORB_UART2", 0x2091_0012, U1),
    key("MSGOUT-UBX_NAV_ORB_USB", 0x2091_0013, U1),
    key("MSGOUT-UBX_NAV_POSECEF_I2C", 0x2091_0024, U1),
    key("MSGOUT-UBX_NAV_POSECEF_SPI", 0x2091_0028, U1),
    key("MSGOUT-UBX_NAV_POSECEF_UART1", 0x2091_0025, U1),
    key("MSGOUT-UBX_NAV_POSECEF_UART2", 0x2091_0026, U1),
    key("MSGOUT-UBX_NAV_POSECEF_USB", 0x2091_0027, U1),
    key("MSGOUT-UBX_NAV_POSLLH_I2C", 0x2091_0029, U1),
    key("MSGOUT-UBX_NAV_POSLLH_SPI", 0x2091_002d, U1),
    key("MSGOUT-UBX_NAV_POSLLH_UART1", 0x2091_002a, U1),
    key("MSGOUT-UBX_NAV_POSLLH_UART2", 0x2091_002b, U1),
    key("MSGOUT-UBX_NAV_POSLLH_USB", 0x2091_002c, U1),
    key("MSGOUT-UBX_NAV_PVT_I2C", 0x2091_0006, U1),
    key("MSGOUT-UBX_NAV_PVT_SPI", 0x2091_000a, U1),
    key("MSGOUT-UBX_NAV_PVT_UART1", 0x2091_0007, U1),
    key("MSGOUT-UBX_NAV_PVT_UART2", 0x2091_0008, U1),
    key("MSGOUT-UBX_NAV_PVT_USB", 0x2091_0009, U1),
    key("MSGOUT-UBX_NAV_RELPOSNED_I2C", 0x2091_008d, U1),
    key("MSGOUT-UBX_NAV_RELPOSNED_SPI", 0x2091_0091, U1),
    key("MSGOUT-UBX_NAV_RELPOSNED_UART1", 0x2091_008e, U1),
    key("MSGOUT-UBX_NAV_RELPOSNED_UART2", 0x2091_008f, U1),
    key("MSGOUT-UBX_NAV_RELPOSNED_USB", 0x2091_0090, U1),
    key("MSGOUT-UBX_NAV_SAT_I2C", 0x2091_0015, U1),
    key("MSGOUT-UBX_NAV_SAT_SPI", 0x2091_0019, U1),
    key("MSGOUT-UBX_NAV_SAT_UART1", 0x2091_0016, U1),
    key("MSGOUT-UBX_NAV_SAT_UART2", 0x2091_0017, U1),
    key("MSGOUT-UBX_NAV_SAT_USB", 0x2091_0018, U1),
    key("MSGOUT-UBX_NAV_SBAS_I2C", 0x2091_006a, U1),
    key("MSGOUT-UBX_NAV_SBAS_SPI", 0x2091_006e, U1),
    key("MSGOUT-UBX_NAV_SBAS_UART1", 0x2091_006b, U1),
    key("MSGOUT-UBX_NAV_SBAS_UART2", 0x2091_006c, U1),
    key("MSGOUT-UBX_NAV_SBAS_USB", 0x2091_006d, U1),
    key("MSGOUT-UBX_NAV_SIG_I2C", 0x2091_0345, U1),
    key("MSGOUT-UBX_NAV_SIG_SPI", 0x2091_0349, U1),
    key("MSGOUT-UBX_NAV_SIG_UART1", 0x2091_0346, U1),
    key("MSGOUT-UBX_NAV_SIG_UART2", 0x2091_0347, U1),
    key("MSGOUT-UBX_NAV_SIG_USB", 0x2091_0348, U1),
    key("MSGOUT-UBX_NAV_STATUS_I2C", 0x2091_001a, U1),
    key("MSGOUT-UBX_NAV_STATUS_SPI", 0x2091_001e, U1),
    key("MSGOUT-UBX_NAV_STATUS_UART1", 0x2091_001b, U1),
    key("MSGOUT-UBX_NAV_STATUS_UART2", 0x2091_001c, U1),
    key("MSGOUT-UBX_NAV_STATUS_USB", 0x2091_001d, U1),
    key("MSGOUT-UBX_NAV_SVIN_I2C", 0x2091_0088, U1),
    key("MSGOUT-UBX_NAV_SVIN_SPI", 0x2091_008c, U1),
    key("MSGOUT-UBX_NAV_SVIN_UART1", 0x2091_0089, U1),
    key("MSGOUT-UBX_NAV_SVIN_UART2", 0x2091_008a, U1),
    key("MSGOUT-UBX_NAV_SVIN_USB", 0x2091_008b, U1),
    key("MSGOUT-UBX_NAV_TIMEBDS_I2C", 0x2091_0051, U1),
    key("MSGOUT-UBX_NAV_TIMEBDS_SPI", 0x2091_0055, U1),
    key("MSGOUT-UBX_NAV_TIMEBDS_UART1", 0x2091_0052, U1),
    key("MSGOUT-UBX_NAV_TIMEBDS_UART2", 0x2091_0053, U1),
    key("MSGOUT-UBX_NAV_TIMEBDS_USB", 0x2091_0054, U1),
    key("MSGOUT-UBX_NAV_TIMEGAL_I2C", 0x2091_0056, U1),
    key("MSGOUT-UBX_NAV_TIMEGAL_SPI", 0x2091_005a, U1),
    key("MSGOUT-UBX_NAV_TIMEGAL_UART1", 0x2091_0057, U1),
    key("MSGOUT-UBX_NAV_TIMEGAL_UART2", 0x2091_0058, U1),
    key("MSGOUT-UBX_NAV_TIMEGAL_USB", 0x2091_0059, U1),
    key("MSGOUT-UBX_NAV_TIMEGLO_I2C", 0x2091_004c, U1),
    key("MSGOUT-UBX_NAV_TIMEGLO_SPI", 0x2091_0050, U1),
    key("MSGOUT-UBX_NAV_TIMEGLO_UART1", 0x2091_004d, U1),
    key("MSGOUT-UBX_NAV_TIMEGLO_UART2", 0x2091_004e, U1),
    key("MSGOUT-UBX_NAV_TIMEGLO_USB", 0x2091_004f, U1),
    key("MSGOUT-UBX_NAV_TIMEGPS_I2C", 0x2091_0047, U1),
    key("MSGOUT-UBX_NAV_TIMEGPS_SPI", 0x2091_004b, U1),
    key("MSGOUT-UBX_NAV_TIMEGPS_UART1", 0x2091_0048, U1),
    key("MSGOUT-UBX_NAV_TIMEGPS_UART2", 0x2091_0049, U1),
    key("MSGOUT-UBX_NAV_TIMEGPS_USB", 0x2091_004a, U1),
    key("MSGOUT-UBX_NAV_TIMELS_I2C", 0x2091_0060, U1),
    key("MSGOUT-UBX_NAV_TIMELS_SPI", 0x2091_0064, U1),
    key("MSGOUT-UBX_NAV_TIMELS_UART1", 0x2091_0061, U1),
    key("MSGOUT-UBX_NAV_TIMELS_UART2", 0x2091_0062, U1),
    key("MSGOUT-UBX_NAV_TIMELS_USB", 0x2091_0063, U1),
    key("MSGOUT-UBX_NAV_TIMEUTC_I2C", 0x2091_005b, U1),
    key("MSGOUT-UBX_NAV_TIMEUTC_SPI", 0x2091_005f, U1),
    key("MSGOUT-UBX_NAV_TIMEUTC_UART1", 0x2091_005c, U1),
    key("MSGOUT-UBX_NAV_TIMEUTC_UART2", 0x2091_005d, U1),
    key("MSGOUT-UBX_NAV_TIMEUTC_USB", 0x2091_005e, U1),
    key("MSGOUT-UBX_NAV_VELECEF_I2C", 0x2091_003d, U1),
    key("MSGOUT-UBX_NAV_VELECEF_SPI", 0x2091_0041, U1),
    key("MSGOUT-UBX_NAV_VELECEF_UART1", 0x2091_003e, U1),
    key("MSGOUT-UBX_NAV_VELECEF_UART2", 0x2091_003f, U1),
    key("MSGOUT-UBX_NAV_VELECEF_USB", 0x2091_0040, U1),
    key("MSGOUT-UBX_NAV_VELNED_I2C", 0x2091_0042, U1),
    key("MSGOUT-UBX_NAV_VELNED_SPI", 0x2091_0046, U1),
    key("MSGOUT-UBX_NAV_VELNED_UART1", 0x2091_0043, U1),
    key("MSGOUT-UBX_NAV_VELNED_UART2", 0x2091_0044, U1),
    key("MSGOUT-UBX_NAV_VELNED_USB", 0x2091_0045, U1),
    key("MSGOUT-UBX_RXM_MEASX_I2C", 0x2091_0204, U1),
    key("MSGOUT-UBX_RXM_MEASX_SPI", 0x2091_0208, U1),
    key("MSGOUT-UBX_RXM_MEASX_UART1", 0x2091_0205, U1),
    key("MSGOUT-UBX_RXM_MEASX_UART2", 0x2091_0206, U1),
    key("MSGOUT-UBX_RXM_MEASX_USB", 0x2091_0207, U1),
    key("MSGOUT-UBX_RXM_RAWX_I2C", 0x2091_02a4, U1),
    key("MSGOUT-UBX_RXM_RAWX_SPI", 0x2091_02a8, U1),
    key("MSGOUT-UBX_RXM_RAWX_UART1", 0x2091_02a5, U1),
    key("MSGOUT-UBX_RXM_RAWX_UART2", 0x2091_02a6, U1),
    key("MSGOUT-UBX_RXM_RAWX_USB", 0x2091_02a7, U1),
    key("MSGOUT-UBX_RXM_RLM_I2C", 0x2091_025e, U1),
    key("MSGOUT-UBX_RXM_RLM_SPI", 0x2091_0262, U1),
    key("MSGOUT-UBX_RXM_RLM_UART1", 0x2091_025f, U1),
    key("MSGOUT-UBX_RXM_RLM_UART2", 0x2091_0260, U1),
    key("MSGOUT-UBX_RXM_RLM_USB", 0x2091_0261, U1),
    key("MSGOUT-UBX_RXM_RTCM_I2C", 0x2091_0268, U1),
    key("MSGOUT-UBX_RXM_RTCM_SPI", 0x2091_026c, U1),
    key("MSGOUT-UBX_RXM_RTCM_UART1", 0x2091_0269, U1),
    key("MSGOUT-UBX_RXM_RTCM_UART2", 0x2091_026a, U1),
    key("MSGOUT-UBX_RXM_RTCM_USB", 0x2091_026b, U1),
    key("MSGOUT-UBX_RXM_SFRBX_I2C", 0x2091_0231, U1),
    key("MSGOUT-UBX_RXM_SFRBX_SPI", 0x2091_0235, U1),
    key("MSGOUT-UBX_RXM_SFRBX_UART1", 0x2091_0232, U1),
    key("MSGOUT-UBX_RXM_SFRBX_UART2", 0x2091_0233, U1),
    key("MSGOUT-UBX_RXM_SFRBX_USB", 0x2091_0234, U1),
    key("MSGOUT-UBX_TIM_SVIN_I2C", 0x2091_0097, U1),
    key("MSGOUT-UBX_TIM_SVIN_SPI", 0x2091_009b, U1),
    key("MSGOUT-UBX_TIM_SVIN_UART1", 0x2091_0098, U1),
    key("MSGOUT-UBX_TIM_SVIN_UART2", 0x2091_0099, U1),
    key("MSGOUT-UBX_TIM_SVIN_USB", 0x2091_009a, U1),
    key("MSGOUT-UBX_TIM_TM2_I2C", 0x2091_0178, U1),
    key("MSGOUT-UBX_TIM_TM2_SPI", 0x2091_017c, U1),
    key("MSGOUT-UBX_TIM_TM2_UART1", 0x2091_0179, U1),
    key("MSGOUT-UBX_TIM_TM2_UART2", 0x2091_017a, U1),
    key("MSGOUT-UBX_TIM_TM2_USB", 0x2091_017b, U1),
    key("MSGOUT-UBX_TIM_TP_I2C", 0x2091_017d, U1),
    key("MSGOUT-UBX_TIM_TP_SPI", 0x2091_0181, U1),
    key("MSGOUT-UBX_TIM_TP_UART1", 0x2091_017e, U1),
    key("MSGOUT-UBX_TIM_TP_UART2", 0x2091_017f, U1),
    key("MSGOUT-UBX_TIM_TP_USB", 0x2091_0180, U1),
    key("MSGOUT-UBX_TIM_VRFY_I2C", 0x2091_0092, U1),
    key("MSGOUT-UBX_TIM_VRFY_SPI", 0x2091_0096, U1),
    key("MSGOUT-UBX_TIM_VRFY_UART1", 0x2091_0093, U1),
    key("MSGOUT-UBX_TIM_VRFY_UART2", 0x2091_0094, U1),
    key("MSGOUT-UBX_TIM_VRFY_USB", 0x2091_0095, U1),

    // NAVHPG
    key("NAVHPG-DGNSSMODE", 0x2014_0011, U1),

    // NAVSPG
    key("NAVSPG-FIXMODE", 0x2011_0011, U1),
    key("NAVSPG-INIFIX3D", 0x1011_0013, U1),
    key("NAVSPG-WKNROLLOVER", 0x3011_0017, U2),
    key("NAVSPG-USE_PPP", 0x1011_0019, U1),
    key("NAVSPG-UTCSTANDARD", 0x2011_001c, U1),
    key("NAVSPG-DYNMODEL", 0x2011_0021, U1),
    key("NAVSPG-ACKAIDING", 0x1011_0025, U1),
    key("NAVSPG-USE_USRDAT", 0x1011_0061, U1),
    key("NAVSPG-USRDAT_MAJA", 0x5011_0062, R8),
    key("NAVSPG-USRDAT_FLAT", 0x5011_0063, R8),
    key("NAVSPG-USRDAT_DX", 0x4011_0064, R4),
    key("NAVSPG-USRDAT_DY", 0x4011_0065, R4),
    key("NAVSPG-USRDAT_DZ", 0x4011_0066, R4),
    key("NAVSPG-USRDAT_ROTX", 0x4011_0067, R4),
    key("NAVSPG-USRDAT_ROTY", 0x4011_0068, R4),
    key("NAVSPG-USRDAT_ROTZ", 0x4011_0069, R4),
    key("NAVSPG-USRDAT_SCALE", 0x4011_006a, R4),
    key("NAVSPG-INFIL_MINSVS", 0x2011_00a1, U1),
    key("NAVSPG-INFIL_MAXSVS", 0x2011_00a2, U1),
    key("NAVSPG-INFIL_MINCNO", 0x2011_00a3, U1),
    key("NAVSPG-INFIL_MINELEV", 0x2011_00a4, I1),
    key("NAVSPG-INFIL_NCNOTHRS", 0x2011_00aa, U1),
    key("NAVSPG-INFIL_CNOTHRS", 0x2011_00ab, U1),
    key("NAVSPG-OUTFIL_PDOP", 0x3011_00b1, U2),
    key("NAVSPG-OUTFIL_TDOP", 0x3011_00b2, U2),
    key("NAVSPG-OUTFIL_PACC", 0x3011_00b3, U2),
    key("NAVSPG-OUTFIL_TACC", 0x3011_00b4, U2),
    key("NAVSPG-OUTFIL_FACC", 0x3011_00b5, U2),
    key("NAVSPG-CONSTR_ALT", 0x4011_00c1, I4),
    key("NAVSPG-CONSTR_ALTVAR", 0x4011_00c2, U4),
    key("NAVSPG-CONSTR_DGNSSTO", 0x2011_00c4, U1),

    // NMEA
    key("NMEA-PROTVER", 0x2093_0001, U1),
    key("NMEA-MAXSVS", 0x2093_0002, U1),
    key("NMEA-COMPAT", 0x1093_0003, U1),
    key("NMEA-CONSIDER", 0x1093_0004, U1),
    key("NMEA-LIMIT82", 0x1093_0005, U1),
    key("NMEA-HIGHPREC", 0x1093_0006, U1),
    key("NMEA-SVNUMBERING", 0x2093_0007, U1),
    key("NMEA-FILT_GPS", 0x1093_0011, U1),
    key("NMEA-FILT_SBAS", 0x1093_0012, U1),
    key("NMEA-FILT_QZSS", 0x1093_0015, U1),
    key("NMEA-FILT_GLO", 0x1093_0016, U1),
    key("NMEA-FILT_BDS", 0x1093_0017, U1),
    key("NMEA-OUT_INVFIX", 0x1093_0021, U1),
    key("NMEA-OUT_MSKFIX", 0x1093_0022, U1),
    key("NMEA-OUT_INVTIME", 0x1093_0023, U1),
    key("NMEA-OUT_INVDATE", 0x1093_0024, U1),
    key("NMEA-OUT_ONLYGPS", 0x1093_0025, U1),
    key("NMEA-OUT_FROZENCOG", 0x1093_0026, U1),
    key("NMEA-MAINTALKERID", 0x2093_0031, U1),
    key("NMEA-GSVTALKERID", 0x2093_0032, U1),
    key("NMEA-BDSTALKERID", 0x3093_0033, U2),

    // ODO
    key("ODO-USE_ODO", 0x1022_0001, U1),
    key("ODO-USE_COG", 0x1022_0002, U1),
    key("ODO-OUTLPVEL", 0x1022_0003, U1),
    key("ODO-OUTLPCOG", 0x1022_0004, U1),
    key("ODO-PROFILE", 0x2022_0005, U1),
    key("ODO-COGMAXSPEED", 0x2022_0021, U1),
    key("ODO-COGMAXPOSACC", 0x2022_0022, U1),
    key("ODO-COGLPGAIN", 0x2022_0032, U1),
    key("ODO-VELLPGAIN", 0x2022_0031, U1),

    // RATE
    key("RATE-MEAS", 0x3021_0001, U2),
    key("RATE-NAV", 0x3021_0002, U2),
    key("RATE-TIMEREF", 0x2021_0003, U1),

    // RINV
    key("RINV-DUMP", 0x10c7_0001, U1),
    key("RINV-BINARY", 0x10c7_0002, U1),
    key("RINV-DATA_SIZE", 0x20c7_0003, U1),
    key("RINV-CHUNK0", 0x50c7_0004, U8),
    key("RINV-CHUNK1", 0x50c7_0005, U8),
    key("RINV-CHUNK2", 0x50c7_0006, U8),
    key("RINV-CHUNK3", 0x50c7_0007, U8),

    // SBAS
    key("SBAS-USE_TESTMODE", 0x1036_0002, U1),
    key("SBAS-USE_RANGING", 0x1036_0003, U1),
    key("SBAS-USE_DIFFCORR", 0x1036_0004, U1),
    key("SBAS-USE_INTEGRITY", 0x1036_0005, U1),
    key("SBAS-PRNSCANMASK", 0x5036_0006, U8),

    // SIGNAL
    key("SIGNAL-GPS_ENA", 0x1031_001f, U1),
    key("SIGNAL-GPS_L1CA_ENA", 0x1031_0001, U1),
    key("SIGNAL-GPS_L2C_ENA", 0x1031_0003, U1),
    key("SIGNAL-SBAS_ENA", 0x1031_0020, U1),
    key("SIGNAL-SBAS_L1CA_ENA", 0x1031_0005, U1),
    key("SIGNAL-GAL_ENA", 0x1031_0021, U1),
    key("SIGNAL-GAL_E1_ENA", 0x1031_0007, U1),
    key("SIGNAL-GAL_E5B_ENA", 0x1031_000a, U1),
    key("SIGNAL-BDS_ENA", 0x1031_0022, U1),
    key("SIGNAL-BDS_B1_ENA", 0x1031_000d, U1),
    key("SIGNAL-BDS_B2_ENA", 0x1031_000e, U1),
    key("SIGNAL-QZSS_ENA", 0x1031_0024, U1),
    key("SIGNAL-QZSS_L1CA_ENA", 0x1031_0012, U1),
    key("SIGNAL-QZSS_L1S_ENA", 0x1031_0014, U1),
    key("SIGNAL-QZSS_L2C_ENA", 0x1031_0015, U1),
    key("SIGNAL-GLO_ENA", 0x1031_0025, U1),
    key("SIGNAL-GLO_L1_ENA", 0x1031_0018, U1),
    key("SIGNAL-GLO_L2_ENA", 0x1031_001a, U1),

    // SPI
    key("SPI-MAXFF", 0x2064_0001, U1),
    key("SPI-CPOLARITY", 0x1064_0002, U1),
    key("SPI-CPHASE", 0x1064_0003, U1),
    key("SPI-EXTENDEDTIMEOUT", 0x1064_0005, U1),
    key("SPI-ENABLED", 0x1064_0006, U1),

    // SPIINPROT
    key("SPIINPROT-UBX", 0x1079_0001, U1),
    key("SPIINPROT-NMEA", 0x1079_0002, U1),
    key("SPIINPROT-RTCM2X", 0x1079_0003, U1),
    key("SPIINPROT-RTCM3X", 0x1079_0004, U1),

    // SPIOUTPROT
    key("SPIOUTPROT-UBX", 0x107a_0001, U1),
    key("SPIOUTPROT-NMEA", 0x107a_0002, U1),
    key("SPIOUTPROT-RTCM3X", 0x107a_0004, U1),

    // TMODE
    key("TMODE-MODE", 0x2003_0001, U1),
    key("TMODE-POS_TYPE", 0x2003_0002, U1),
    key("TMODE-ECEF_X", 0x4003_0003, I4),
    key("TMODE-ECEF_Y", 0x4003_0004, I4),
    key("TMODE-ECEF_Z", 0x4003_0005, I4),
    key("TMODE-ECEF_X_HP", 0x2003_0006, I1),
    key("TMODE-ECEF_Y_HP", 0x2003_0007, I1),
    key("TMODE-ECEF_Z_HP", 0x2003_0008, I1),
    key("TMODE-LAT", 0x4003_0009, I4),
    key("TMODE-LON", 0x4003_000a, I4),
    key("TMODE-HEIGHT", 0x4003_000b, I4),
    key("TMODE-LAT_HP", 0x2003_000c, I1),
    key("TMODE-LON_HP", 0x2003_000d, I1),
    key("TMODE-HEIGHT_HP", 0x2003_000e, I1),
    key("TMODE-FIXED_POS_ACC", 0x4003_000f, U4),
    key("TMODE-SVIN_MIN_DUR", 0x4003_0010, U4),
    key("TMODE-SVIN_ACC_LIMIT", 0x4003_0011, U4),

    // TP
    key("TP-PULSE_DEF", 0x2005_0023, U1),
    key("TP-PULSE_LENGTH_DEF", 0x2005_0030, U1),
    key("TP-ANT_CABLEDELAY", 0x3005_0001, I2),
    key("TP-PERIOD_TP1", 0x4005_0002, U4),
    key("TP-PERIOD_LOCK_TP1", 0x4005_0003, U4),
    key("TP-FREQ_TP1", 0x4005_0024, U4),
    key("TP-FREQ_LOCK_TP1", 0x4005_0025, U4),
    key("TP-LEN_TP1", 0x4005_0004, U4),
    key("TP-LEN_LOCK_TP1", 0x4005_0005, U4),
    key("TP-DUTY_TP1", 0x5005_002a, R8),
    key("TP-DUTY_LOCK_TP1", 0x5005_002b, R8),
    key("TP-USER_DELAY_TP1", 0x4005_0006, I4),
    key("TP-TP1_ENA", 0x1005_0007, U1),
    key("TP-SYNC_GNSS_TP1", 0x1005_0008, U1),
    key("TP-USE_LOCKED_TP1", 0x1005_0009, U1),
    key("TP-ALIGN_TO_TOW_TP1", 0x1005_000a, U1),
    key("TP-POL_TP1", 0x1005_000b, U1),
    key("TP-TIMEGRID_TP1", 0x2005_000c, U1),
    key("TP-PERIOD_TP2", 0x4005_000d, U4),
    key("TP-PERIOD_LOCK_TP2", 0x4005_000e, U4),
    key("TP-FREQ_TP2", 0x4005_0026, U4),
    key("TP-FREQ_LOCK_TP2", 0x4005_0027, U4),
    key("TP-LEN_TP2", 0x4005_000f, U4),
    key("TP-LEN_LOCK_TP2", 0x4005_0010, U4),
    key("TP-DUTY_TP2", 0x5005_002c, R8),
    key("TP-DUTY_LOCK_TP2", 0x5005_002d, R8),
    key("TP-USER_DELAY_TP2", 0x4005_0011, I4),
    key("TP-TP2_ENA", 0x1005_0012, U1),
    key("TP-SYNC_GNSS_TP2", 0x1005_0013, U1),
    key("TP-USE_LOCKED_TP2", 0x1005_0014, U1),
    key("TP-ALIGN_TO_TOW_TP2", 0x1005_0015, U1),
    key("TP-POL_TP2", 0x1005_0016, U1),
    key("TP-TIMEGRID_TP2", 0x2005_0017, U1),

    // UART1
    key("UART1-BAUDRATE", 0x4052_0001, U4),
    key("UART1-STOPBITS", 0x2052_0002, U1),
    key("UART1-DATABITS", 0x2052_0003, U1),
    key("UART1-PARITY", 0x2052_0004, U1),
    key("UART1-ENABLED", 0x1052_0005, U1),

    // UART1INPROT
    key("UART1INPROT-UBX", 0x1073_0001, U1),
    key("UART1INPROT-NMEA", 0x1073_0002, U1),
    key("UART1INPROT-RTCM2X", 0x1073_0003, U1),
    key("UART1INPROT-RTCM3X", 0x1073_0004, U1),

    // UART1OUTPROT
    key("UART1OUTPROT-UBX", 0x1074_0001, U1),
    key("UART1OUTPROT-NMEA", 0x1074_0002, U1),
    key("UART1OUTPROT-RTCM3X", 0x1074_0004, U1),

    // UART2
    key("UART2-BAUDRATE", 0x4053_0001, U4),
    key("UART2-STOPBITS", 0x2053_0002, U1),
    key("UART2-DATABITS", 0x2053_0003, U1),
    key("UART2-PARITY", 0x2053_0004, U1),
    key("UART2-ENABLED", 0x1053_0005, U1),
    key("UART2-REMAP", 0x1053_0006, U1),

    // UART2INPROT
    key("UART2INPROT-UBX", 0x1075_0001, U1),
    key("UART2INPROT-NMEA", 0x1075_0002, U1),
    key("UART2INPROT-RTCM2X", 0x1075_0003, U1),
    key("UART2INPROT-RTCM3X", 0x1075_0004, U1),

    // UART2OUTPROT
    key("UART2OUTPROT-UBX", 0x1076_0001, U1),
    key("UART2OUTPROT-NMEA", 0x1076_0002, U1),
    key("UART2OUTPROT-RTCM3X", 0x1076_0004, U1),

    // USB
    key("USB-ENABLED", 0x1065_0001, U1),
    key("USB-SELFPOW", 0x1065_0002, U1),
    key("USB-VENDOR_ID", 0x3065_000a, U2),
    key("USB-PRODUCT_ID", 0x3065_000b, U2),
    key("USB-POWER", 0x3065_000c, U2),
    key("USB-VENDOR_STR0", 0x5065_000d, U8),
    key("USB-VENDOR_STR1", 0x5065_000e, U8),
    key("USB-VENDOR_STR2", 0x5065_000f, U8),
    key("USB-VENDOR_STR3", 0x5065_0010, U8),
    key("USB-PRODUCT_STR0", 0x5065_0011, U8),
    key("USB-PRODUCT_STR1", 0x5065_0012, U8),
    key("USB-PRODUCT_STR2", 0x5065_0013, U8),
    key("USB-PRODUCT_STR3", 0x5065_0014, U8),
    key("USB-SERIAL_NO_STR0", 0x5065_0015, U8),
    key("USB-SERIAL_NO_STR1", 0x5065_0016, U8),
    key("USB-SERIAL_NO_STR2", 0x5065_0017, U8),
    key("USB-SERIAL_NO_STR3", 0x5065_0018, U8),

    // USBINPROT
    key("USBINPROT-UBX", 0x1077_0001, U1),
    key("USBINPROT-NMEA", 0x1077_0002, U1),
    key("USBINPROT-RTCM2X", 0x1077_0003, U1),
    key("USBINPROT-RTCM3X", 0x1077_0004, U1),

    // USBOUTPROT
    key("USBOUTPROT-UBX", 0x1078_0001, U1),
    key("USBOUTPROT-NMEA", 0x1078_0002, U1),
    key("USBOUTPROT-RTCM3X", 0x1078_0004, U1),
];
