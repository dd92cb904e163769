use nmea_messages::{ChecksumStatus, Sentence, parse};

const CAPTURE: &str = "\
$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62
$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76
$GPGSV,1,1,0,,,,,,,,,,,,,,,,*49
$PGRMZ,93,f,3*21
$PSRF103,00,6,00,0*23
$GPGLL,4916.45,N,12311.12,W,225444,A,*1E
";

fn main() {
    for line in CAPTURE.lines() {
        let msg = match parse(line) {
            Ok(msg) => msg,
            Err(e) => {
                println!("{line}: {e}");
                continue;
            }
        };

        if msg.checksum.is_mismatch() {
            println!("{}: {:?} (corrupt line kept)", msg.message_type, msg.checksum);
        }

        match msg.sentence {
            Sentence::RMC(rmc) => {
                println!(
                    "RMC fix at {:?}: {:.4}, {:.4}",
                    rmc.fix_datetime(),
                    rmc.latitude,
                    rmc.longitude
                );
            }
            Sentence::GGA(gga) => {
                println!(
                    "GGA {:?} fix, {} satellites, altitude {} {}",
                    gga.quality,
                    gga.satellite_count,
                    gga.altitude,
                    gga.altitude_units.unwrap_or(' ')
                );
            }
            Sentence::GSV(gsv) => {
                println!(
                    "GSV page {}/{}: {} satellites in view",
                    gsv.message_number, gsv.total_messages, gsv.satellites_in_view
                );
            }
            Sentence::GLL(gll) => {
                println!(
                    "GLL position {:.4}, {:.4} (active: {})",
                    gll.latitude, gll.longitude, gll.data_active
                );
            }
            Sentence::Unknown => {
                println!("{}: no typed decoder, {} raw fields", msg.message_type, msg.fields.len());
            }
            other => println!("{other:?}"),
        }
    }
}
