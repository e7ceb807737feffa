use crate::corpus::LoadStats;

struct LogKV<'a>(&'a LoadStats, &'a crate::trie::Trie);

impl<'a> log::kv::Source for LogKV<'a> {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn log::kv::VisitSource<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let LoadStats {
            tokens,
            distinct,
            skipped,
        } = *self.0;

        visitor.visit_pair(log::kv::Key::from_str("tokens"), tokens.into())?;
        visitor.visit_pair(log::kv::Key::from_str("distinct"), distinct.into())?;
        visitor.visit_pair(log::kv::Key::from_str("skipped"), skipped.into())?;
        visitor.visit_pair(
            log::kv::Key::from_str("root_weight"),
            self.1.weight("").unwrap_or(0).into(),
        )?;
        Ok(())
    }
}

/// Emits one `corpus` record describing a finished load of `source`.
pub fn loaded(source: &std::path::Path, stats: &LoadStats, trie: &crate::trie::Trie) {
    log::logger().log(
        &log::RecordBuilder::new()
            .level(log::Level::Info)
            .target("corpus")
            .key_values(&LogKV(stats, trie))
            .args(format_args!("{}", source.display()))
            .build(),
    );
}
