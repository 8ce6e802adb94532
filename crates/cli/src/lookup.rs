use crate::di::Services;
use ferrous_sd_domain::{DnsRecord, QueryState, RecordSet, RecordType};
use ferrous_sd_infrastructure::dns::forwarding::RecordConverter;
use std::fmt::Write;

pub async fn resolve(
    services: &Services,
    zone: &str,
    state: &QueryState,
) -> anyhow::Result<RecordSet> {
    let set = match state.record_type {
        RecordType::A | RecordType::AAAA => {
            RecordSet::from_answers(services.address.execute(zone, state, &[]).await?)
        }
        RecordType::SRV => services.srv.execute(zone, state).await?,
        RecordType::MX => services.mx.execute(zone, state).await?,
        RecordType::CNAME => RecordSet::from_answers(services.cname.execute(zone, state).await?),
        RecordType::TXT => RecordSet::from_answers(services.txt.execute(zone, state).await?),
    };
    Ok(set)
}

/// Presentation format, answers first, then a marked additional section.
pub fn render(set: &RecordSet) -> String {
    let mut out = String::new();
    for record in &set.answers {
        let _ = writeln!(out, "{}", presentation(record));
    }
    if !set.extra.is_empty() {
        out.push_str(";; ADDITIONAL\n");
        for record in &set.extra {
            let _ = writeln!(out, "{}", presentation(record));
        }
    }
    out
}

fn presentation(record: &DnsRecord) -> String {
    match RecordConverter::to_hickory(record) {
        Ok(hickory) => hickory.to_string(),
        Err(_) => record.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_sd_domain::RecordData;

    #[test]
    fn test_render_marks_additional_section() {
        let set = RecordSet::new(
            vec![DnsRecord::new(
                "_http._tcp.skydns.local.",
                300,
                RecordData::SRV {
                    priority: 10,
                    weight: 100,
                    port: 80,
                    target: "web.skydns.local.".to_string(),
                },
            )],
            vec![DnsRecord::new(
                "web.skydns.local.",
                300,
                RecordData::A("10.0.0.1".parse().unwrap()),
            )],
        );

        let out = render(&set);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("_http._tcp.skydns.local."));
        assert!(lines[0].contains("web.skydns.local."));
        assert_eq!(lines[1], ";; ADDITIONAL");
        assert!(lines[2].ends_with("10.0.0.1"));
    }

    #[test]
    fn test_render_empty_set() {
        assert!(render(&RecordSet::default()).is_empty());
    }
}
