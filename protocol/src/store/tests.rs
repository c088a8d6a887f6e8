#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{BattleRecord, RecordId, StatEntry, TeamMember, parse_battle_records, parse_team};

    #[test]
    fn test_record_id_number_and_text() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[3, "a1f9"]"#).unwrap();

        assert_eq!(ids[0], RecordId::Number(3));
        assert_eq!(ids[1], RecordId::Text("a1f9".into()));
        assert_eq!(ids[0].to_string(), "3");
        assert_eq!(ids[1].to_string(), "a1f9");
    }

    #[test]
    fn test_parse_team() {
        let body = r#"[
            { "id": 1, "name": "bulbasaur", "sprite": "https://img/1.png",
              "stats": [ { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } } ] },
            { "id": "x7", "name": "charmander" }
        ]"#;
        let team = parse_team(body).unwrap();

        assert_eq!(team.len(), 2);
        assert_eq!(team[0].stats[0].name(), "hp");
        assert_eq!(team[1].id, Some(RecordId::Text("x7".into())));
        assert!(team[1].stats.is_empty());
        assert!(team[1].sprite.is_none());
    }

    #[test]
    fn test_new_member_omits_id() {
        let member = TeamMember::new("eevee", None, vec![StatEntry::new("hp", 55)]);
        let json = serde_json::to_value(&member).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["stats"][0]["stat"]["name"], "hp");
    }

    #[test]
    fn test_parse_legacy_battle_record() {
        // Records written before explanations were stored
        let body = r#"[
            { "id": 9, "timestamp": "2024-05-01T12:30:00.000Z",
              "player1": "pikachu", "player2": "onix", "winner": "onix" }
        ]"#;
        let records = parse_battle_records(body).unwrap();

        assert_eq!(records[0].winner, "onix");
        assert!(records[0].explanation.is_none());
        assert_eq!(
            records[0].timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_battle_record_serializes_timestamp() {
        let record = BattleRecord {
            id: None,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            player1: "pikachu".into(),
            player2: "onix".into(),
            winner: "pikachu".into(),
            explanation: Some("pikachu wins".into()),
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["timestamp"], "2024-05-01T12:30:00Z");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_parse_collection_invalid() {
        assert!(parse_team("").is_err());
        assert!(parse_battle_records("{}").is_err());
    }
}
