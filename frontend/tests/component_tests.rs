#[cfg(test)]
mod component_tests {
    use frontend::components::kpi_card::KpiGradient;
    use frontend::components::sidebar::game_filter_label;
    use frontend::components::teams_table::{
        game_badge_classes, result_count_label, win_rate_classes, EMPTY_MESSAGE,
    };
    use frontend::data::load_teams;
    use frontend::pages::dashboard::{kpi_cards, DashboardModel};
    use pretty_assertions::assert_eq;
    use shared::{ChartDataContent, FilterSpec, Game, GameFilter, KpiSummary, Team};

    fn team(id: &str, name: &str, game: Game, wins: u32, losses: u32) -> Team {
        let total = wins + losses;
        Team {
            id: id.to_string(),
            name: name.to_string(),
            game,
            region: "Europe".to_string(),
            wins,
            losses,
            total_matches: total,
            win_rate: f64::from(wins) * 100.0 / f64::from(total),
            founded: 2015,
            logo: None,
            yearly_stats: Vec::new(),
        }
    }

    fn sample_teams() -> Vec<Team> {
        vec![
            team("a", "Alpha", Game::Valorant, 10, 10),
            team("b", "Bravo", Game::LeagueOfLegends, 600, 400),
            team("c", "Charlie", Game::Valorant, 9, 1),
        ]
    }

    #[test]
    fn test_game_filter_labels() {
        let labels: Vec<&str> = GameFilter::choices().map(|c| game_filter_label(&c)).collect();
        assert_eq!(
            labels,
            vec![
                "All games",
                "League of Legends",
                "Counter-Strike 2",
                "Dota 2",
                "Valorant",
                "Overwatch 2"
            ]
        );
    }

    #[test]
    fn test_win_rate_tiers() {
        assert!(win_rate_classes(70.0).contains("green"));
        assert!(win_rate_classes(69.99).contains("blue"));
        assert!(win_rate_classes(60.0).contains("blue"));
        assert!(win_rate_classes(50.0).contains("yellow"));
        assert!(win_rate_classes(49.99).contains("red"));
    }

    #[test]
    fn test_game_badges_differ_per_title() {
        let mut badges: Vec<&str> = Game::ALL.iter().map(|g| game_badge_classes(*g)).collect();
        badges.sort();
        badges.dedup();
        assert_eq!(badges.len(), Game::ALL.len());
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(0), "0 teams found");
        assert_eq!(result_count_label(1), "1 team found");
        assert_eq!(result_count_label(12), "12 teams found");
        assert_eq!(EMPTY_MESSAGE, "No teams match the selected filters.");
    }

    #[test]
    fn test_kpi_cards_formatting() {
        let kpis = KpiSummary::new(4, 1234, 617);
        let cards = kpi_cards(&kpis);
        let values: Vec<&str> = cards.iter().map(|(_, value, _, _)| value.as_str()).collect();
        assert_eq!(values, vec!["4", "20", "1,234", "50.00%"]);
        assert_eq!(cards[3].0, "Global Win Rate");
        assert_eq!(cards[0].3, KpiGradient::Primary);
        assert_eq!(cards[3].3.class(), "gradient-warning");
    }

    #[test]
    fn test_dashboard_model_for_category() {
        let teams = sample_teams();
        let spec = FilterSpec::default().with_game(GameFilter::Only(Game::Valorant));
        let model = DashboardModel::build(&teams, &spec);

        let ids: Vec<&str> = model.teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert_eq!(model.kpis.total_teams, 2);
        assert_eq!(model.kpis.total_matches, 30);

        let ChartDataContent::SingleSeries(slices) = &model.charts[2].data else {
            panic!("expected pie slices");
        };
        assert_eq!(slices[0].value, 19.0);
        assert_eq!(slices[1].value, 11.0);
    }

    #[test]
    fn test_dashboard_model_with_no_matches() {
        let teams = sample_teams();
        let spec = FilterSpec::default().with_search_query("zzz");
        let model = DashboardModel::build(&teams, &spec);

        assert!(model.teams.is_empty());
        assert_eq!(model.kpis, KpiSummary::default());
        assert!(model.charts[0].data.is_empty());
        assert!(model.charts[1].data.is_empty());
        let values: Vec<String> = kpi_cards(&model.kpis).into_iter().map(|(_, value, _, _)| value).collect();
        assert_eq!(values, vec!["0", "0", "0", "0.00%"]);
    }

    #[test]
    fn test_load_teams_reports_context() {
        let err = load_teams("{ not json").unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse bundled team data"));
    }
}
