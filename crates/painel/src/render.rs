use rede_core::{
    Categorical, CategoryCounts, DashboardView, DistrictCapacity, InstitutionRecord,
    NO_RESULTS_MESSAGE, format_institution_count, format_thousands,
};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "=".repeat(title.chars().count()));
}

fn category_chart<T: Categorical>(out: &mut String, title: &str, counts: &CategoryCounts<T>) {
    let _ = writeln!(out, "\n{}", title);
    let max = counts.max_value() as u64;
    let width = counts
        .entries()
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in counts.entries() {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>5}  {}",
            entry.name,
            entry.value,
            bar(entry.value as u64, max),
            width = width
        );
    }
}

fn district_chart(out: &mut String, districts: &[DistrictCapacity]) {
    let _ = writeln!(out, "\nCapacidade de Atendimento por Distrito");
    let max = districts.iter().map(|d| d.total_capacity).max().unwrap_or(0);
    let width = districts
        .iter()
        .map(|d| d.district.chars().count())
        .max()
        .unwrap_or(0);

    for d in districts {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>9}  {}  ({})",
            d.district,
            format_thousands(d.total_capacity),
            bar(d.total_capacity, max),
            format_institution_count(d.institution_count),
            width = width
        );
    }
}

pub fn dashboard(view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    let summary = &view.summary;

    heading(&mut out, "Resumo Executivo");
    let _ = writeln!(out, "  Total de Instituições: {}", format_thousands(summary.total_institutions as u64));
    let _ = writeln!(out, "  Capacidade Total:      {}", format_thousands(summary.total_capacity));
    let _ = writeln!(out, "  Proteção Especial:     {}", summary.special_protection_count);
    let _ = writeln!(out, "  Proteção Básica:       {}", summary.basic_protection_count);
    let _ = writeln!(out, "  Distritos Cobertos:    {}", summary.district_count);

    heading(&mut out, "Análise de Dados");
    category_chart(&mut out, "Distribuição por Nível de Proteção", &view.charts.protection_level);
    category_chart(&mut out, "Distribuição por Complexidade", &view.charts.complexity);
    category_chart(&mut out, "Público Atendido", &view.charts.target_public);
    district_chart(&mut out, &view.charts.capacity_by_district);

    heading(&mut out, "Instituições Cadastradas");
    let _ = writeln!(
        out,
        "  Busca: \"{}\" | Nível: {} | Distrito: {} (opções: {})",
        view.query.search_text,
        view.query.protection_level,
        view.query.district,
        view.district_options.join(", ")
    );

    if view.is_empty_result() {
        let _ = writeln!(out, "\n  {}", NO_RESULTS_MESSAGE);
        return out;
    }

    for row in &view.rows {
        let record = row.record;
        let _ = writeln!(
            out,
            "  [{:>3}] {} | {} | {} | {} | {}",
            row.position,
            record.name,
            record.protection_level,
            record.complexity,
            format_thousands(record.service_capacity),
            record.neighborhood
        );
    }

    out
}

/// Full record, as shown in the detail modal
pub fn detail(position: usize, record: &InstitutionRecord) -> String {
    let mut out = String::new();

    heading(&mut out, &record.name);
    let _ = writeln!(out, "  Posição:               {}", position);
    let _ = writeln!(out, "  Tipo de Atendimento:   {}", record.service_type);
    let _ = writeln!(out, "  Serviços Prestados:    {}", record.services_provided);
    let _ = writeln!(out, "  Nível de Proteção:     {}", record.protection_level);
    let _ = writeln!(out, "  Complexidade:          {}", record.complexity);
    let _ = writeln!(out, "  Tipificação:           {}", record.classification);
    let _ = writeln!(out, "  Público:               {}", record.target_public);
    let _ = writeln!(out, "  Capacidade:            {}", format_thousands(record.service_capacity));
    let _ = writeln!(out, "  Endereço:              {}", record.full_address);
    let _ = writeln!(out, "  CEP:                   {}", record.postal_code);
    let _ = writeln!(out, "  Bairro / Distrito:     {} / {}", record.neighborhood, record.district);
    if let Some(image) = &record.image_url {
        let _ = writeln!(out, "  Imagem:                {}", image);
    }
    if let Some(map) = &record.map_embed_url {
        let _ = writeln!(out, "  Mapa:                  {}", map);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rede_core::{Dashboard, Dataset, TableQuery};

    const BODY: &str = r#"[
        {"instituicao": "CRAS Centro", "servicosPrestados": "PAIF", "nivelProtecao": "Proteção Social",
         "complexidade": "Básica", "tipificacao": "PAIF", "enderecoCompleto": "Rua A, 1", "cep": 25950000,
         "bairro": "Várzea", "distrito": "Centro", "tipoAtendimento": "Contínuo",
         "capacidadeAtendimento": 1500, "publico": "Famílias", "mapEmbedUrl": "https://maps.example/cras"}
    ]"#;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_dashboard_sections() {
        let dataset = Dataset::from_json(BODY).unwrap();
        let text = dashboard(&Dashboard::compute(&dataset, &TableQuery::new()));

        assert!(text.contains("Resumo Executivo"));
        assert!(text.contains("Capacidade Total:      1.500"));
        assert!(text.contains("Distribuição por Complexidade"));
        assert!(text.contains("CRAS Centro"));
        assert!(!text.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_dashboard_no_results() {
        let dataset = Dataset::from_json(BODY).unwrap();
        let view = Dashboard::compute(&dataset, &TableQuery::new().with_search("abrigo"));
        assert!(dashboard(&view).contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_detail_includes_media() {
        let dataset = Dataset::from_json(BODY).unwrap();
        let record = dataset.get(0).unwrap();
        let text = detail(0, record);
        assert!(text.contains("Mapa:                  https://maps.example/cras"));
        assert!(!text.contains("Imagem:"));
    }
}
