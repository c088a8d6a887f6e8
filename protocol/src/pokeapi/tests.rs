#[cfg(test)]
mod tests {
    use crate::{parse_pokemon_details, parse_pokemon_page};

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "sprites": { "front_default": "https://img/25.png", "back_default": null },
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 40, "effort": 0, "stat": { "name": "defense", "url": "https://pokeapi.co/api/v2/stat/3/" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-defense", "url": "https://pokeapi.co/api/v2/stat/5/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ]
    }"#;

    #[test]
    fn test_parse_details() {
        let details = parse_pokemon_details(PIKACHU).unwrap();

        assert_eq!(details.id, 25);
        assert_eq!(details.name, "pikachu");
        assert_eq!(details.stats.len(), 6);
        assert_eq!(details.sprite(), Some("https://img/25.png"));
    }

    #[test]
    fn test_base_stat_by_name() {
        let details = parse_pokemon_details(PIKACHU).unwrap();

        assert_eq!(details.base_stat("hp"), Some(35));
        assert_eq!(details.base_stat("speed"), Some(90));
        assert_eq!(details.base_stat("special"), None);
    }

    #[test]
    fn test_parse_details_missing_name() {
        let result = parse_pokemon_details(r#"{ "id": 1, "name": "" }"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_details_invalid() {
        assert!(parse_pokemon_details("not json").is_err());
        assert!(parse_pokemon_details("   ").is_err());
    }

    #[test]
    fn test_parse_page() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let page = parse_pokemon_page(body).unwrap();

        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "ivysaur");
    }
}
